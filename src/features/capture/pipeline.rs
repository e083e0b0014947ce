//! The capture-submit pipeline.
//!
//! One invocation makes at most one network attempt and always ends in an
//! [`Outcome`]; nothing is retried. When the camera is not known to be
//! available the pipeline stops before touching the frame source or the
//! network.

use super::{frame::FrameSource, multipart::MultipartForm};
use crate::app_lib::{
    AppError, Outcome,
    api::RawResponse,
    outcome::{failure_detail, success_message},
};
use crate::features::camera::CameraAvailability;
use tracing::{debug, warn};

/// Sends a capture upload and returns the raw response.
pub trait CaptureTransport {
    /// # Errors
    ///
    /// Returns an error only when no response was received.
    async fn post_multipart(
        &self,
        path: &str,
        form: MultipartForm,
        bearer: Option<&str>,
    ) -> Result<RawResponse, AppError>;
}

/// Where a capture is sent and how its outcome is worded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureTarget {
    Registration,
    Attendance,
}

impl CaptureTarget {
    pub const fn path(self) -> &'static str {
        match self {
            CaptureTarget::Registration => "/api/features/register/",
            CaptureTarget::Attendance => "/api/features/mark-attendance/",
        }
    }

    /// Registration is an authenticated call; attendance marking is anonymous.
    pub const fn requires_auth(self) -> bool {
        matches!(self, CaptureTarget::Registration)
    }

    pub const fn success_fallback(self) -> &'static str {
        match self {
            CaptureTarget::Registration => "Registration successful",
            CaptureTarget::Attendance => "Attendance marked",
        }
    }

    pub const fn failure_fallback(self) -> &'static str {
        match self {
            CaptureTarget::Registration => "Registration failed",
            CaptureTarget::Attendance => "Attendance marking failed",
        }
    }
}

/// Captures one frame, uploads it with `fields`, and reports the result.
///
/// `auth_token` is attached as a bearer token only for targets that
/// [require auth](CaptureTarget::requires_auth), and only when present.
pub async fn submit<F, T>(
    camera: CameraAvailability,
    frames: &F,
    transport: &T,
    target: CaptureTarget,
    fields: &[(String, String)],
    auth_token: Option<&str>,
) -> Outcome
where
    F: FrameSource,
    T: CaptureTransport,
{
    if !camera.can_capture() {
        debug!(?target, ?camera, "capture refused without a camera");
        return Outcome::failure(AppError::NoCamera.to_string());
    }

    let jpeg = match frames.capture_jpeg().await {
        Ok(jpeg) => jpeg,
        Err(err) => {
            warn!(?target, error = %err, "frame capture failed");
            return Outcome::failure(err.to_string());
        }
    };

    let form = MultipartForm::capture(jpeg, fields);
    let bearer = auth_token.filter(|_| target.requires_auth());
    debug!(?target, parts = form.parts().len(), "submitting capture");

    match transport.post_multipart(target.path(), form, bearer).await {
        Ok(response) if response.is_success() => {
            Outcome::success(success_message(&response.body, target.success_fallback()))
        }
        Ok(response) => {
            warn!(?target, status = response.status, "capture rejected");
            Outcome::failure(failure_detail(&response.body, target.failure_fallback()))
        }
        Err(err) => {
            warn!(?target, error = %err, "capture upload failed");
            Outcome::failure(target.failure_fallback())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::OutcomeKind;
    use crate::features::capture::multipart::Part;
    use std::cell::{Cell, RefCell};

    struct StaticFrames {
        result: Result<Vec<u8>, AppError>,
        grabs: Cell<usize>,
    }

    impl StaticFrames {
        fn jpeg() -> Self {
            Self {
                result: Ok(vec![0xFF, 0xD8, 0xFF, 0xD9]),
                grabs: Cell::new(0),
            }
        }

        fn broken() -> Self {
            Self {
                result: Err(AppError::Capture("Camera is not ready yet".into())),
                grabs: Cell::new(0),
            }
        }
    }

    impl FrameSource for StaticFrames {
        async fn capture_jpeg(&self) -> Result<Vec<u8>, AppError> {
            self.grabs.set(self.grabs.get() + 1);
            self.result.clone()
        }
    }

    #[derive(Debug)]
    struct Sent {
        path: String,
        form: MultipartForm,
        bearer: Option<String>,
    }

    struct RecordingTransport {
        reply: Result<RawResponse, AppError>,
        sent: RefCell<Vec<Sent>>,
    }

    impl RecordingTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(RawResponse {
                    status,
                    body: body.to_string(),
                }),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                reply: Err(AppError::Network("Unable to reach the server".into())),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl CaptureTransport for RecordingTransport {
        async fn post_multipart(
            &self,
            path: &str,
            form: MultipartForm,
            bearer: Option<&str>,
        ) -> Result<RawResponse, AppError> {
            self.sent.borrow_mut().push(Sent {
                path: path.to_string(),
                form,
                bearer: bearer.map(ToString::to_string),
            });
            self.reply.clone()
        }
    }

    fn registration_fields() -> Vec<(String, String)> {
        vec![
            ("name".to_string(), "Ada".to_string()),
            ("email".to_string(), "ada@example.com".to_string()),
            ("gender".to_string(), "female".to_string()),
            ("dob".to_string(), "1990-01-01".to_string()),
        ]
    }

    #[tokio::test]
    async fn no_network_call_without_a_camera() {
        for camera in [CameraAvailability::Unknown, CameraAvailability::Unavailable] {
            let frames = StaticFrames::jpeg();
            let transport = RecordingTransport::replying(200, r#"{"message": "ok"}"#);

            let outcome = submit(
                camera,
                &frames,
                &transport,
                CaptureTarget::Attendance,
                &[],
                None,
            )
            .await;

            assert_eq!(outcome, Outcome::failure("No camera detected"));
            assert_eq!(transport.calls(), 0);
            assert_eq!(frames.grabs.get(), 0);
        }
    }

    #[tokio::test]
    async fn attendance_posts_only_the_image_anonymously() {
        let frames = StaticFrames::jpeg();
        let transport =
            RecordingTransport::replying(200, r#"{"message": "Attendance marked for Ada"}"#);

        let outcome = submit(
            CameraAvailability::Available,
            &frames,
            &transport,
            CaptureTarget::Attendance,
            &[],
            None,
        )
        .await;

        assert_eq!(outcome, Outcome::success("Attendance marked for Ada"));
        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].path, "/api/features/mark-attendance/");
        assert_eq!(sent[0].bearer, None);
        assert_eq!(sent[0].form.parts().len(), 1);
        assert_eq!(sent[0].form.image(), Some(&[0xFF, 0xD8, 0xFF, 0xD9][..]));
    }

    #[tokio::test]
    async fn registration_sends_fields_and_bearer() {
        let frames = StaticFrames::jpeg();
        let transport = RecordingTransport::replying(200, r#"{"message": "Registration successful"}"#);

        let outcome = submit(
            CameraAvailability::Available,
            &frames,
            &transport,
            CaptureTarget::Registration,
            &registration_fields(),
            Some("a1"),
        )
        .await;

        assert!(outcome.is_success());
        let sent = transport.sent.borrow();
        assert_eq!(sent[0].path, "/api/features/register/");
        assert_eq!(sent[0].bearer.as_deref(), Some("a1"));
        assert_eq!(sent[0].form.text("name"), Some("Ada"));
        assert_eq!(sent[0].form.text("dob"), Some("1990-01-01"));
        assert!(matches!(
            &sent[0].form.parts()[0],
            Part::File { filename, .. } if filename == "face.jpg"
        ));
    }

    #[tokio::test]
    async fn error_field_becomes_the_failure_message() {
        let frames = StaticFrames::jpeg();
        let transport = RecordingTransport::replying(400, r#"{"error": "Face not detected"}"#);

        let outcome = submit(
            CameraAvailability::Available,
            &frames,
            &transport,
            CaptureTarget::Registration,
            &registration_fields(),
            Some("a1"),
        )
        .await;

        assert_eq!(outcome.kind, OutcomeKind::Failure);
        assert_eq!(outcome.message, "Face not detected");
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn transport_failure_uses_generic_message_without_retry() {
        let frames = StaticFrames::jpeg();
        let transport = RecordingTransport::unreachable();

        let outcome = submit(
            CameraAvailability::Available,
            &frames,
            &transport,
            CaptureTarget::Attendance,
            &[],
            None,
        )
        .await;

        assert_eq!(outcome, Outcome::failure("Attendance marking failed"));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn empty_failure_body_uses_target_fallback() {
        let frames = StaticFrames::jpeg();
        let transport = RecordingTransport::replying(500, "");

        let outcome = submit(
            CameraAvailability::Available,
            &frames,
            &transport,
            CaptureTarget::Registration,
            &registration_fields(),
            Some("a1"),
        )
        .await;

        assert_eq!(outcome, Outcome::failure("Registration failed"));
    }

    #[tokio::test]
    async fn frame_failure_stops_before_the_network() {
        let frames = StaticFrames::broken();
        let transport = RecordingTransport::replying(200, "{}");

        let outcome = submit(
            CameraAvailability::Available,
            &frames,
            &transport,
            CaptureTarget::Attendance,
            &[],
            None,
        )
        .await;

        assert_eq!(outcome.kind, OutcomeKind::Failure);
        assert_eq!(outcome.message, "Capture error: Camera is not ready yet");
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn each_submit_grabs_a_fresh_frame() {
        let frames = StaticFrames::jpeg();
        let transport = RecordingTransport::replying(200, "{}");

        for _ in 0..2 {
            let outcome = submit(
                CameraAvailability::Available,
                &frames,
                &transport,
                CaptureTarget::Attendance,
                &[],
                None,
            )
            .await;
            assert_eq!(outcome, Outcome::success("Attendance marked"));
        }

        assert_eq!(frames.grabs.get(), 2);
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn attendance_never_forwards_a_session_token() {
        let frames = StaticFrames::jpeg();
        let transport = RecordingTransport::replying(200, "{}");

        let outcome = submit(
            CameraAvailability::Available,
            &frames,
            &transport,
            CaptureTarget::Attendance,
            &[],
            Some("a1"),
        )
        .await;

        assert!(outcome.is_success());
        assert_eq!(transport.sent.borrow()[0].bearer, None);
    }

    #[tokio::test]
    async fn registration_without_a_token_sends_no_bearer() {
        let frames = StaticFrames::jpeg();
        let transport = RecordingTransport::replying(200, "{}");

        submit(
            CameraAvailability::Available,
            &frames,
            &transport,
            CaptureTarget::Registration,
            &registration_fields(),
            None,
        )
        .await;

        assert_eq!(transport.sent.borrow()[0].bearer, None);
    }
}
