//! User-visible results of a submit or mutation attempt, plus the rules for
//! pulling a readable message out of an API response body.

use serde_json::Value;

/// Maximum number of response body characters surfaced to the UI.
pub const MAX_DETAIL_CHARS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Failure,
}

/// Result object shown to the user after a capture submit or list mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub message: String,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Failure,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }
}

/// Reads the `message` field of a successful response, or `fallback`.
pub fn success_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| string_field(&value, "message"))
        .unwrap_or_else(|| fallback.to_string())
}

/// Picks the first readable detail of a failed response: `message`, then
/// `error`, then the raw body. Returns `fallback` when none is usable,
/// including a JSON `null` body.
pub fn failure_detail(body: &str, fallback: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => string_field(&value, "message")
            .or_else(|| string_field(&value, "error"))
            .or_else(|| match &value {
                Value::Null => None,
                Value::String(text) => sanitize(text),
                _ => sanitize(trimmed),
            })
            .unwrap_or_else(|| fallback.to_string()),
        Err(_) => sanitize(trimmed).unwrap_or_else(|| fallback.to_string()),
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToString::to_string)
}

/// Trims and truncates a body for display; `None` when nothing is left.
pub fn sanitize(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_DETAIL_CHARS).collect())
    }
}
