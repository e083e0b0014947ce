use thiserror::Error;

/// Failures surfaced by API helpers, storage and the capture pipeline.
///
/// `Display` output is shown to users as-is, so variants must never carry
/// tokens or request payloads.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("{0}")]
    Auth(String),
    #[error("{0}")]
    Validation(String),
    #[error("No camera detected")]
    NoCamera,
    #[error("Capture error: {0}")]
    Capture(String),
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn http_errors_render_status_and_body() {
        let err = AppError::Http {
            status: 404,
            message: "User not found".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (404): User not found");
    }

    #[test]
    fn auth_errors_render_only_the_message() {
        let err = AppError::Auth("Invalid credentials".to_string());
        assert_eq!(err.to_string(), "Invalid credentials");
    }
}
