//! Transient notifications shown top-center and dismissed after a fixed delay.

use crate::app_lib::{
    Outcome, OutcomeKind,
    toast::{TOAST_DURATION_MS, Toast, ToastQueue},
};
use gloo_timers::future::TimeoutFuture;
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
}

impl ToastContext {
    fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    /// Queues `outcome` and schedules its dismissal.
    pub fn show(&self, outcome: Outcome) {
        let queue = self.queue;
        let Some(id) = queue.try_update(|toasts| toasts.push(outcome)) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            queue.try_update(|toasts| toasts.dismiss(id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(Outcome::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Outcome::failure(message));
    }

    fn dismiss(&self, id: u64) {
        self.queue.update(|toasts| toasts.dismiss(id));
    }
}

/// Provides the toast context and renders the toaster above `children`.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    provide_context(ToastContext::new());

    view! {
        {children()}
        <Toaster />
    }
}

pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(ToastContext::new)
}

#[component]
fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed top-4 left-1/2 -translate-x-1/2 z-[60] flex flex-col items-center gap-2" aria-live="polite">
            <For
                each=move || toasts.queue.with(|queue| queue.items().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let class = match toast.kind {
                        OutcomeKind::Success => "bg-green-500",
                        OutcomeKind::Failure => "bg-red-500",
                    };
                    let id = toast.id;
                    view! {
                        <button
                            type="button"
                            class=format!("{class} text-white text-sm px-6 py-3 rounded-lg shadow-lg transition-all")
                            role="status"
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {toast.message}
                        </button>
                    }
                }
            />
        </div>
    }
}
