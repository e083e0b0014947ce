//! Capture-device discovery and the live preview stream feeding the capture
//! pipeline.

pub(crate) mod probe;
#[cfg(target_arch = "wasm32")]
pub(crate) mod stream;

pub(crate) use probe::CameraAvailability;
