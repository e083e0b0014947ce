//! HTTP helpers for the facemark REST API. Feature clients use these helpers to
//! avoid duplicating request setup and error mapping. The helpers do not store
//! tokens; they only attach the bearer token a caller hands them.
//!
//! No client-side timeout is imposed; requests run until the browser's fetch
//! settles.

use super::{config::AppConfig, errors::AppError};

/// Raw status and body of a response, for callers that interpret failures
/// themselves (the capture pipeline reads `message`/`error` fields).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Builds a URL from the configured API base URL and the provided path.
pub fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// `Authorization` header value for a bearer token; blank tokens yield `None`.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| format!("Bearer {token}"))
}

/// Maps a non-success status and body into `AppError::Http`.
pub fn http_error(status: u16, body: &str) -> AppError {
    AppError::Http {
        status,
        message: super::outcome::sanitize(body).unwrap_or_else(|| "Request failed.".to_string()),
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use transport::*;

#[cfg(target_arch = "wasm32")]
mod transport {
    use super::{AppError, RawResponse, bearer_header, build_url, http_error};
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::{Serialize, de::DeserializeOwned};
    use serde_json::to_string;
    use tracing::debug;
    use web_sys::FormData;

    /// Fetches JSON, attaching the bearer token when one is given.
    pub async fn get_json<T: DeserializeOwned>(
        path: &str,
        token: Option<&str>,
    ) -> Result<T, AppError> {
        let url = build_url(path);
        debug!(%url, "GET");
        let request = with_bearer(Request::get(&url), token)
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;
        let response = request.send().await.map_err(map_request_error)?;

        handle_json_response(response).await
    }

    /// Posts JSON without credentials and parses a JSON response.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let url = build_url(path);
        let payload = to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        debug!(%url, "POST");
        let request = Request::post(&url)
            .header("Content-Type", "application/json")
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;
        let response = request.send().await.map_err(map_request_error)?;

        handle_json_response(response).await
    }

    /// Replaces a resource with a JSON body; the response body is ignored.
    pub async fn put_json<B: Serialize>(
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<(), AppError> {
        let url = build_url(path);
        let payload = to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        debug!(%url, "PUT");
        let request = with_bearer(Request::put(&url), token)
            .header("Content-Type", "application/json")
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;
        let response = request.send().await.map_err(map_request_error)?;

        handle_empty_response(response).await
    }

    /// Deletes a resource; a 204 with or without a body counts as success.
    pub async fn delete(path: &str, token: Option<&str>) -> Result<(), AppError> {
        let url = build_url(path);
        debug!(%url, "DELETE");
        let request = with_bearer(Request::delete(&url), token)
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;
        let response = request.send().await.map_err(map_request_error)?;

        handle_empty_response(response).await
    }

    /// Posts a multipart form and hands back the raw status and body.
    /// The browser supplies the multipart boundary, so no content type is set here.
    pub async fn post_form(
        path: &str,
        form: FormData,
        token: Option<&str>,
    ) -> Result<RawResponse, AppError> {
        let url = build_url(path);
        debug!(%url, authorized = token.is_some(), "POST multipart");
        let request = with_bearer(Request::post(&url), token)
            .body(form)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;
        let response = request.send().await.map_err(map_request_error)?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(RawResponse { status, body })
    }

    fn with_bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match bearer_header(token) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    /// Maps transport failures into `AppError::Network`.
    fn map_request_error(err: gloo_net::Error) -> AppError {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }

    /// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
    async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(http_error(status, &body))
        }
    }

    /// Handles responses whose body is not needed.
    async fn handle_empty_response(response: Response) -> Result<(), AppError> {
        if response.ok() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(http_error(status, &body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_with_a_single_slash() {
        assert_eq!(
            build_url_with_base("http://localhost:8000/", "/api/features/users/"),
            "http://localhost:8000/api/features/users/"
        );
        assert_eq!(
            build_url_with_base(" http://localhost:8000 ", "api/auth/signin/"),
            "http://localhost:8000/api/auth/signin/"
        );
    }

    #[test]
    fn empty_base_keeps_relative_path() {
        assert_eq!(
            build_url_with_base("", "/api/features/register/"),
            "/api/features/register/"
        );
    }

    #[test]
    fn bearer_header_requires_a_token() {
        assert_eq!(bearer_header(Some("a1")), Some("Bearer a1".to_string()));
        assert_eq!(bearer_header(Some("  ")), None);
        assert_eq!(bearer_header(None), None);
    }

    #[test]
    fn http_error_sanitizes_body() {
        assert_eq!(
            http_error(500, "   "),
            AppError::Http {
                status: 500,
                message: "Request failed.".to_string()
            }
        );
        assert_eq!(
            http_error(404, " {\"error\": \"User not found\"} ").to_string(),
            "Request failed (404): {\"error\": \"User not found\"}"
        );
    }

    #[test]
    fn raw_response_success_range() {
        let ok = RawResponse {
            status: 204,
            body: String::new(),
        };
        let bad = RawResponse {
            status: 400,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }
}
