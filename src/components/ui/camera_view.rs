//! Live webcam preview used by the registration and attendance views.
//!
//! The probe runs once on mount and publishes its verdict through
//! `availability`; the stream is opened only after a camera was found and is
//! stopped when the component is dropped.

use crate::{
    app_lib::theme::Theme,
    features::camera::{CameraAvailability, probe, stream},
};
use leptos::{html::Video, prelude::*, task::spawn_local};
use tracing::warn;
use web_sys::MediaStream;

#[component]
pub fn CameraView(
    video_ref: NodeRef<Video>,
    availability: RwSignal<CameraAvailability>,
) -> impl IntoView {
    let active = StoredValue::new_local(None::<MediaStream>);

    spawn_local(async move {
        let found = probe::detect().await;
        let state = if found {
            CameraAvailability::Available
        } else {
            CameraAvailability::Unavailable
        };
        if availability.try_update(|current| *current = state).is_none() || !found {
            return;
        }

        match stream::open_user_camera().await {
            Ok(media) => {
                let Some(video) = video_ref.try_get_untracked().flatten() else {
                    stream::stop(&media);
                    return;
                };
                stream::attach(&video, &media);
                let kept = active.try_update_value(|slot| *slot = Some(media.clone()));
                if kept.is_none() {
                    stream::stop(&media);
                }
            }
            Err(err) => {
                warn!(error = %err, "camera preview unavailable");
                availability.try_update(|current| *current = CameraAvailability::Unavailable);
            }
        }
    });

    on_cleanup(move || {
        active.try_update_value(|slot| {
            if let Some(media) = slot.take() {
                stream::stop(&media);
            }
        });
    });

    view! {
        <div class="flex flex-col items-center gap-2">
            <div class=Theme::CAMERA_FRAME>
                <video
                    node_ref=video_ref
                    class="w-full h-full object-cover"
                    class:hidden=move || !availability.get().can_capture()
                    autoplay
                    muted
                    playsinline
                ></video>
                <Show when=move || !availability.get().can_capture()>
                    <span class="text-sm text-gray-500 dark:text-gray-400">
                        {move || match availability.get() {
                            CameraAvailability::Unknown => "Looking for a camera...",
                            _ => "No camera detected",
                        }}
                    </span>
                </Show>
            </div>
        </div>
    }
}
