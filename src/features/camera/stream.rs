//! Live webcam preview. A capture view opens one stream on mount, attaches it
//! to its `<video>` element, and stops every track on cleanup so the camera
//! light goes off when the user navigates away.

use crate::app_lib::AppError;
use js_sys::{Object, Reflect};
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

/// Asks for the front-facing camera (`facingMode: "user"`) without audio.
pub async fn open_user_camera() -> Result<MediaStream, AppError> {
    let window = web_sys::window().ok_or_else(|| AppError::Config("Window not found".into()))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|_| AppError::Capture("Media devices are not supported".into()))?;

    let video = Object::new();
    Reflect::set(&video, &"facingMode".into(), &"user".into())
        .map_err(|_| AppError::Capture("Failed to set camera constraints".into()))?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::FALSE);
    constraints.set_video(&video.into());

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|_| AppError::Capture("Camera access is not supported".into()))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|_| AppError::Capture("Camera access was denied".into()))?;
    stream
        .dyn_into::<MediaStream>()
        .map_err(|_| AppError::Capture("Unexpected camera stream".into()))
}

/// Attaches `stream` to `video` and starts playback.
pub fn attach(video: &HtmlVideoElement, stream: &MediaStream) {
    video.set_muted(true);
    video.set_autoplay(true);
    let _ = video.set_attribute("playsinline", "");
    video.set_src_object(Some(stream));
    let _ = video.play();
}

/// Stops every track of `stream`.
pub fn stop(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
    debug!("camera stream stopped");
}
