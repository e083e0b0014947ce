//! Webcam capture-and-submit workflow shared by face registration and
//! attendance marking: grab one JPEG frame, wrap it in a multipart form with
//! any profile fields, POST it once, and turn the answer into an `Outcome`.
//!
//! Frames are grabbed at submit time and never reused across submissions.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod frame;
pub(crate) mod multipart;
pub(crate) mod pipeline;
pub(crate) mod registration;

#[cfg(target_arch = "wasm32")]
pub(crate) use client::submit_from_video;
pub(crate) use pipeline::CaptureTarget;
