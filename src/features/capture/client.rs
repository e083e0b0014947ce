//! Browser transport for capture uploads.

use super::{
    frame::VideoFrameSource,
    multipart::{MultipartForm, Part},
    pipeline::{CaptureTarget, CaptureTransport, submit},
};
use crate::app_lib::{AppError, Outcome, api, api::RawResponse};
use crate::features::camera::CameraAvailability;
use js_sys::{Array, Uint8Array};
use web_sys::{Blob, BlobPropertyBag, FormData, HtmlVideoElement};

/// Runs the capture pipeline against the live preview element.
pub async fn submit_from_video(
    camera: CameraAvailability,
    video: Option<HtmlVideoElement>,
    target: CaptureTarget,
    fields: Vec<(String, String)>,
    token: Option<String>,
) -> Outcome {
    let Some(video) = video else {
        return Outcome::failure(AppError::NoCamera.to_string());
    };
    let frames = VideoFrameSource::new(video);
    submit(
        camera,
        &frames,
        &HttpCaptureTransport,
        target,
        &fields,
        token.as_deref(),
    )
    .await
}

/// Posts capture uploads through the shared API helpers.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpCaptureTransport;

impl CaptureTransport for HttpCaptureTransport {
    async fn post_multipart(
        &self,
        path: &str,
        form: MultipartForm,
        bearer: Option<&str>,
    ) -> Result<RawResponse, AppError> {
        let form_data = to_form_data(&form)?;
        api::post_form(path, form_data, bearer).await
    }
}

fn to_form_data(form: &MultipartForm) -> Result<FormData, AppError> {
    let form_data =
        FormData::new().map_err(|_| AppError::Serialization("Failed to create form".into()))?;

    for part in form.parts() {
        match part {
            Part::File {
                name,
                filename,
                content_type,
                bytes,
            } => {
                let blob = jpeg_blob(bytes, content_type)?;
                form_data
                    .append_with_blob_and_filename(name, &blob, filename)
                    .map_err(|_| AppError::Serialization("Failed to attach image".into()))?;
            }
            Part::Text { name, value } => {
                form_data
                    .append_with_str(name, value)
                    .map_err(|_| AppError::Serialization(format!("Failed to attach {name}")))?;
            }
        }
    }

    Ok(form_data)
}

fn jpeg_blob(bytes: &[u8], content_type: &str) -> Result<Blob, AppError> {
    let array = Uint8Array::from(bytes);
    let parts = Array::of1(&array);
    let options = BlobPropertyBag::new();
    options.set_type(content_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| AppError::Serialization("Failed to encode image".into()))
}
