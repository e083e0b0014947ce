//! Still-frame acquisition from the live preview.

use crate::app_lib::AppError;
use base64::{Engine, engine::general_purpose::STANDARD};

const JPEG_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// Anything that can hand over one JPEG-encoded frame on demand.
pub trait FrameSource {
    /// # Errors
    ///
    /// Returns `AppError::Capture` when no frame can be produced (the video is
    /// not playing yet, or the canvas refuses to encode).
    async fn capture_jpeg(&self) -> Result<Vec<u8>, AppError>;
}

/// Decodes the `data:image/jpeg;base64,...` URL produced by
/// `HTMLCanvasElement.toDataURL("image/jpeg")`.
pub fn decode_jpeg_data_url(data_url: &str) -> Result<Vec<u8>, AppError> {
    let encoded = data_url
        .strip_prefix(JPEG_DATA_URL_PREFIX)
        .ok_or_else(|| AppError::Capture("Frame was not encoded as JPEG".into()))?;
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|err| AppError::Capture(format!("Invalid frame encoding: {err}")))?;
    if bytes.is_empty() {
        return Err(AppError::Capture("Captured frame is empty".into()));
    }
    Ok(bytes)
}

#[cfg(target_arch = "wasm32")]
pub use video::VideoFrameSource;

#[cfg(target_arch = "wasm32")]
mod video {
    use super::{FrameSource, decode_jpeg_data_url};
    use crate::app_lib::AppError;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement};

    /// Grabs frames from a playing `<video>` through an off-screen canvas.
    pub struct VideoFrameSource {
        video: HtmlVideoElement,
    }

    impl VideoFrameSource {
        pub fn new(video: HtmlVideoElement) -> Self {
            Self { video }
        }
    }

    impl FrameSource for VideoFrameSource {
        async fn capture_jpeg(&self) -> Result<Vec<u8>, AppError> {
            let width = self.video.video_width();
            let height = self.video.video_height();
            if width == 0 || height == 0 {
                return Err(AppError::Capture("Camera is not ready yet".into()));
            }

            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or_else(|| AppError::Config("Document not found".into()))?;
            let canvas = document
                .create_element("canvas")
                .map_err(|_| AppError::Capture("Failed to create canvas".into()))?
                .dyn_into::<HtmlCanvasElement>()
                .map_err(|_| AppError::Capture("Failed to create canvas".into()))?;
            canvas.set_width(width);
            canvas.set_height(height);

            let context = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
                .ok_or_else(|| AppError::Capture("Canvas 2D context unavailable".into()))?;
            context
                .draw_image_with_html_video_element(&self.video, 0.0, 0.0)
                .map_err(|_| AppError::Capture("Failed to draw video frame".into()))?;

            let data_url = canvas
                .to_data_url_with_type("image/jpeg")
                .map_err(|_| AppError::Capture("Failed to encode frame".into()))?;
            decode_jpeg_data_url(&data_url)
        }
    }
}
