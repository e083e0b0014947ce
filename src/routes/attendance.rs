//! Anonymous attendance marking from the live preview.

use crate::app_lib::{Outcome, theme::Theme};
use crate::components::{Alert, AppShell, Button, CameraView, use_toasts};
use crate::features::{
    camera::CameraAvailability,
    capture::{CaptureTarget, submit_from_video},
};
use leptos::{html::Video, prelude::*};

#[component]
pub fn AttendancePage() -> impl IntoView {
    let toasts = use_toasts();
    let video_ref = NodeRef::<Video>::new();
    let availability = RwSignal::new(CameraAvailability::default());
    let (outcome, set_outcome) = signal::<Option<Outcome>>(None);

    let mark_action = Action::new_local(move |_: &()| {
        let camera = availability.get_untracked();
        let video = video_ref.get_untracked();
        async move {
            submit_from_video(camera, video, CaptureTarget::Attendance, Vec::new(), None).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = mark_action.value().get() {
            if result.is_success() {
                toasts.success(result.message.clone());
            } else {
                toasts.error(result.message.clone());
            }
            set_outcome.set(Some(result));
        }
    });

    let busy = Signal::derive(move || {
        mark_action.pending().get() || !availability.get().can_capture()
    });

    view! {
        <AppShell>
            <div class=format!("{} max-w-xl mx-auto p-6 space-y-6", Theme::CARD)>
                <div class="space-y-1 text-center">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Mark Attendance"</h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Face the camera and press the button."
                    </p>
                </div>
                <CameraView video_ref=video_ref availability=availability />
                <div class="flex justify-center">
                    <Button
                        disabled=busy
                        on_click=move |_| {
                            set_outcome.set(None);
                            mark_action.dispatch(());
                        }
                    >
                        {move || if mark_action.pending().get() { "Marking..." } else { "Mark Attendance" }}
                    </Button>
                </div>
                {move || {
                    outcome
                        .get()
                        .map(|result| view! { <Alert kind=result.kind.into() message=result.message /> })
                }}
            </div>
        </AppShell>
    }
}
