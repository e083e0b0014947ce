//! Detects whether a video input device exists before capture is offered.
//!
//! Absence and denied access look the same to the user: both leave the camera
//! `Unavailable`. Until the platform enumeration resolves the state is
//! `Unknown`, and capture stays disabled.

use crate::app_lib::AppError;
use tracing::{debug, warn};

/// Device kinds reported by `enumerateDevices()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceKind {
    VideoInput,
    AudioInput,
    AudioOutput,
    Other,
}

/// Last known camera state, as seen by capture controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraAvailability {
    #[default]
    Unknown,
    Unavailable,
    Available,
}

impl CameraAvailability {
    /// Classifies a finished probe; platform errors count as unavailable.
    pub fn from_probe(result: Result<Vec<DeviceKind>, AppError>) -> Self {
        match result {
            Ok(kinds) if kinds.contains(&DeviceKind::VideoInput) => Self::Available,
            Ok(_) => Self::Unavailable,
            Err(err) => {
                warn!(error = %err, "camera probe failed");
                Self::Unavailable
            }
        }
    }

    /// Capture is allowed only once a probe has found a camera.
    pub fn can_capture(self) -> bool {
        self == Self::Available
    }
}

/// Probes the platform and reports whether at least one camera is present.
/// Never fails: enumeration errors yield `false`.
#[cfg(target_arch = "wasm32")]
pub async fn detect() -> bool {
    let availability = CameraAvailability::from_probe(enumerate_device_kinds().await);
    debug!(?availability, "camera probe finished");
    availability.can_capture()
}

#[cfg(target_arch = "wasm32")]
async fn enumerate_device_kinds() -> Result<Vec<DeviceKind>, AppError> {
    use js_sys::Array;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{MediaDeviceInfo, MediaDeviceKind};

    let window = web_sys::window().ok_or_else(|| AppError::Config("Window not found".into()))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|_| AppError::Capture("Media devices are not supported".into()))?;
    let promise = devices
        .enumerate_devices()
        .map_err(|_| AppError::Capture("Device enumeration is not supported".into()))?;
    let list = JsFuture::from(promise)
        .await
        .map_err(|_| AppError::Capture("Device enumeration was rejected".into()))?;

    let kinds = Array::from(&list)
        .iter()
        .filter_map(|entry| entry.dyn_into::<MediaDeviceInfo>().ok())
        .map(|device| match device.kind() {
            MediaDeviceKind::Videoinput => DeviceKind::VideoInput,
            MediaDeviceKind::Audioinput => DeviceKind::AudioInput,
            MediaDeviceKind::Audiooutput => DeviceKind::AudioOutput,
            _ => DeviceKind::Other,
        })
        .collect();
    Ok(kinds)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn detect() -> bool {
    debug!("no media devices off the browser");
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_video_input_makes_the_camera_available() {
        let kinds = vec![DeviceKind::AudioInput, DeviceKind::VideoInput];
        assert_eq!(
            CameraAvailability::from_probe(Ok(kinds)),
            CameraAvailability::Available
        );
    }

    #[test]
    fn audio_only_devices_are_unavailable() {
        let kinds = vec![DeviceKind::AudioInput, DeviceKind::AudioOutput];
        assert_eq!(
            CameraAvailability::from_probe(Ok(kinds)),
            CameraAvailability::Unavailable
        );
        assert_eq!(
            CameraAvailability::from_probe(Ok(Vec::new())),
            CameraAvailability::Unavailable
        );
    }

    #[test]
    fn platform_errors_are_treated_as_unavailable() {
        let denied = Err(AppError::Capture("Device enumeration was rejected".into()));
        assert_eq!(
            CameraAvailability::from_probe(denied),
            CameraAvailability::Unavailable
        );
    }

    #[test]
    fn capture_is_gated_on_available_only() {
        assert!(!CameraAvailability::Unknown.can_capture());
        assert!(!CameraAvailability::Unavailable.can_capture());
        assert!(CameraAvailability::Available.can_capture());
        assert_eq!(CameraAvailability::default(), CameraAvailability::Unknown);
    }

    #[tokio::test]
    async fn native_detect_reports_no_camera() {
        assert!(!detect().await);
    }
}
