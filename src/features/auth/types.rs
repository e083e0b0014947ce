use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /api/auth/signin/`.
#[derive(Clone, Serialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

impl SignInRequest {
    /// Trims the username and rejects blank credentials before any request is made.
    pub fn new(username: &str, password: &str) -> Option<Self> {
        let username = username.trim();
        if username.is_empty() || password.trim().is_empty() {
            return None;
        }
        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

impl fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token pair returned by a successful sign-in.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("access", &"<redacted>")
            .field("refresh", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{SignInRequest, TokenPair};

    #[test]
    fn sign_in_request_serializes_username_and_password() {
        let request = SignInRequest::new("  admin ", "s3cret").expect("valid credentials");
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"username": "admin", "password": "s3cret"})
        );
    }

    #[test]
    fn sign_in_request_rejects_blank_fields() {
        assert!(SignInRequest::new("", "pw").is_none());
        assert!(SignInRequest::new("admin", "   ").is_none());
    }

    #[test]
    fn token_pair_deserializes_and_ignores_extra_fields() {
        let pair: TokenPair =
            serde_json::from_str(r#"{"access": "a1", "refresh": "r1", "user": 3}"#)
                .expect("deserialize");
        assert_eq!(pair.access, "a1");
        assert_eq!(pair.refresh, "r1");
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let request = SignInRequest::new("admin", "hunter2").expect("valid credentials");
        let pair = TokenPair {
            access: "a1".to_string(),
            refresh: "r1".to_string(),
        };
        let rendered = format!("{request:?} {pair:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("a1"));
        assert!(!rendered.contains("r1"));
    }
}
