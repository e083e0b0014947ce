//! Client wrapper for the sign-in endpoint. Credentials are never logged and a
//! rejected sign-in maps to a single user-facing message.

use crate::{
    app_lib::{AppError, api},
    features::auth::types::{SignInRequest, TokenPair},
};
use tracing::warn;

pub const SIGN_IN_PATH: &str = "/api/auth/signin/";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Exchanges credentials for a token pair.
/// Any non-success answer is reported as `AppError::Auth`.
pub async fn sign_in(request: &SignInRequest) -> Result<TokenPair, AppError> {
    api::post_json(SIGN_IN_PATH, request)
        .await
        .map_err(|err| match err {
            AppError::Http { status, .. } => {
                warn!(status, "sign-in rejected");
                AppError::Auth(INVALID_CREDENTIALS.to_string())
            }
            other => other,
        })
}
