//! Face registration: profile fields plus one frame from the live preview.

use crate::app_lib::{Outcome, theme::Theme};
use crate::components::{Alert, AppShell, Button, CameraView, use_toasts};
use crate::features::{
    auth::{RequireAuth, guards::AppRoute, state::use_session},
    camera::CameraAvailability,
    capture::{
        CaptureTarget,
        registration::{Gender, RegistrationForm},
        submit_from_video,
    },
};
use crate::routes::paths;
use gloo_timers::future::TimeoutFuture;
use leptos::{html::Video, prelude::*, task::spawn_local};
use leptos_router::hooks::{use_location, use_navigate};

const REDIRECT_DELAY_MS: u32 = 1_000;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <RegisterForm />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let still_here = move || {
        pathname
            .try_get_untracked()
            .is_some_and(|path| AppRoute::Register.is_current(&path))
    };
    let video_ref = NodeRef::<Video>::new();
    let availability = RwSignal::new(CameraAvailability::default());
    let form = RwSignal::new(RegistrationForm::default());
    let (outcome, set_outcome) = signal::<Option<Outcome>>(None);

    let register_action = Action::new_local(move |fields: &Vec<(String, String)>| {
        let fields = fields.clone();
        let camera = availability.get_untracked();
        let video = video_ref.get_untracked();
        let token = session.access_token();
        async move {
            submit_from_video(camera, video, CaptureTarget::Registration, fields, token).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            if result.is_success() {
                toasts.success(result.message.clone());
                let navigate = navigate.clone();
                spawn_local(async move {
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    if still_here() {
                        navigate(paths::HOME, Default::default());
                    }
                });
            } else {
                toasts.error(result.message.clone());
            }
            set_outcome.set(Some(result));
        }
    });

    let on_register = move |_| {
        set_outcome.set(None);
        match form.get_untracked().into_fields() {
            Ok(fields) => {
                register_action.dispatch(fields);
            }
            Err(err) => {
                toasts.error(err.to_string());
                set_outcome.set(Some(Outcome::failure(err.to_string())));
            }
        }
    };

    let busy = Signal::derive(move || {
        register_action.pending().get() || !availability.get().can_capture()
    });

    view! {
        <div class=format!("{} max-w-3xl mx-auto p-6 space-y-6", Theme::CARD)>
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Register Face"</h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Fill in the profile, face the camera, then register."
                </p>
            </div>
            <div class="grid gap-6 md:grid-cols-2">
                <div class="space-y-4">
                    <div>
                        <label class=Theme::LABEL for="name">"Name"</label>
                        <input
                            id="name"
                            type="text"
                            class=Theme::INPUT
                            required
                            on:input=move |event| form.update(|f| f.name = event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            class=Theme::INPUT
                            required
                            on:input=move |event| form.update(|f| f.email = event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="gender">"Gender"</label>
                        <select
                            id="gender"
                            class=Theme::INPUT
                            on:change=move |event| {
                                form.update(|f| f.gender = Gender::parse(&event_target_value(&event)))
                            }
                        >
                            <option value="">"Select gender"</option>
                            {Gender::ALL
                                .into_iter()
                                .map(|gender| view! { <option value=gender.as_str()>{gender.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div>
                        <label class=Theme::LABEL for="dob">"Date of birth"</label>
                        <input
                            id="dob"
                            type="date"
                            class=Theme::INPUT
                            required
                            on:input=move |event| form.update(|f| f.dob = event_target_value(&event))
                        />
                    </div>
                </div>
                <div class="space-y-4">
                    <CameraView video_ref=video_ref availability=availability />
                    <div class="flex justify-center">
                        <Button disabled=busy on_click=on_register>
                            {move || if register_action.pending().get() { "Registering..." } else { "Register Face" }}
                        </Button>
                    </div>
                </div>
            </div>
            {move || {
                outcome
                    .get()
                    .map(|result| view! { <Alert kind=result.kind.into() message=result.message /> })
            }}
        </div>
    }
}
