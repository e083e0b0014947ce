use crate::app_lib::{AppError, theme::Theme};
use crate::components::{Alert, AlertKind, AppShell, Button, use_toasts};
use crate::features::auth::{client, guards::AppRoute, state::use_session, types::SignInRequest};
use crate::routes::paths;
use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::{use_location, use_navigate};

const REDIRECT_DELAY_MS: u32 = 100;

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let still_here = move || {
        pathname
            .try_get_untracked()
            .is_some_and(|path| AppRoute::SignIn.is_current(&path))
    };
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let sign_in_action = Action::new_local(move |request: &SignInRequest| {
        let request = request.clone();
        async move { client::sign_in(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = sign_in_action.value().get() {
            match result {
                Ok(tokens) => {
                    session.sign_in(&tokens);
                    toasts.success("Login successful!");
                    let navigate = navigate.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        if still_here() {
                            navigate(paths::HOME, Default::default());
                        }
                    });
                }
                Err(err) => {
                    toasts.error(err.to_string());
                    set_error.set(Some(err));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        match SignInRequest::new(&username.get_untracked(), &password.get_untracked()) {
            Some(request) => {
                sign_in_action.dispatch(request);
            }
            None => set_error.set(Some(AppError::Validation(
                "Username and password are required.".to_string(),
            ))),
        }
    };

    view! {
        <AppShell>
            <form class=format!("{} max-w-sm mx-auto p-6 space-y-5", Theme::CARD) on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Sign In"</h1>
                <div>
                    <label class=Theme::LABEL for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        class=Theme::INPUT
                        autocomplete="username"
                        required
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div>
                    <label class=Theme::LABEL for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=sign_in_action.pending()>
                    {move || if sign_in_action.pending().get() { "Signing in..." } else { "Sign In" }}
                </Button>
                {move || {
                    error
                        .get()
                        .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
                }}
            </form>
        </AppShell>
    }
}
