//! Persisted access/refresh token pair.
//!
//! `SessionStore` reads and writes both tokens as a unit over any
//! [`KeyValueStore`]. In the browser the backend is `window.localStorage`; when
//! storage is unavailable the store behaves as an always-empty session instead
//! of failing. Token values are never logged.

use crate::app_lib::AppError;
use crate::features::auth::types::TokenPair;
use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};
use tracing::warn;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Credentials the client holds between sign-in and sign-out.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Session {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access_token: Some(access.into()),
            refresh_token: Some(refresh.into()),
        }
    }

    /// Access token, if present and non-empty.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |token: &Option<String>| token.as_ref().map(|_| "<redacted>");
        f.debug_struct("Session")
            .field("access_token", &mask(&self.access_token))
            .field("refresh_token", &mask(&self.refresh_token))
            .finish()
    }
}

/// String key-value persistence, shaped after the Web Storage API.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the backend refuses the write (quota, private mode).
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    fn remove(&self, key: &str);
}

/// In-memory store; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
pub struct BrowserStorage(web_sys::Storage);

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    /// Returns `None` when there is no window or storage is disabled.
    pub fn local() -> Option<Self> {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()
            .map(Self)
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.0
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("Failed to persist {key}.")))
    }

    fn remove(&self, key: &str) {
        let _ = self.0.remove_item(key);
    }
}

/// Reads, writes and clears the token pair as a unit.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    backend: Option<S>,
}

#[cfg(target_arch = "wasm32")]
impl SessionStore<BrowserStorage> {
    /// Store over `localStorage`, degrading to an empty session without it.
    pub fn browser() -> Self {
        Self::new(BrowserStorage::local())
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: Option<S>) -> Self {
        Self { backend }
    }

    /// Current session. A torn pair (one key without the other) reads as empty.
    pub fn get(&self) -> Session {
        let Some(backend) = &self.backend else {
            return Session::default();
        };

        match (backend.get(ACCESS_TOKEN_KEY), backend.get(REFRESH_TOKEN_KEY)) {
            (Some(access), Some(refresh)) => Session {
                access_token: Some(access),
                refresh_token: Some(refresh),
            },
            (None, None) => Session::default(),
            _ => {
                warn!("ignoring incomplete token pair in storage");
                Session::default()
            }
        }
    }

    /// Persists both tokens. If either write fails, both keys are removed so a
    /// half-written pair is never observed.
    pub fn set(&self, access: &str, refresh: &str) {
        let Some(backend) = &self.backend else {
            warn!("session storage unavailable; sign-in will not persist");
            return;
        };

        let written = backend
            .set(ACCESS_TOKEN_KEY, access)
            .and_then(|()| backend.set(REFRESH_TOKEN_KEY, refresh));

        if let Err(err) = written {
            warn!(error = %err, "failed to persist session; rolling back");
            backend.remove(ACCESS_TOKEN_KEY);
            backend.remove(REFRESH_TOKEN_KEY);
        }
    }

    /// Persists a sign-in response and returns the session as now stored.
    pub fn sign_in(&self, tokens: &TokenPair) -> Session {
        self.set(&tokens.access, &tokens.refresh);
        self.get()
    }

    /// Removes both tokens.
    pub fn clear(&self) {
        if let Some(backend) = &self.backend {
            backend.remove(ACCESS_TOKEN_KEY);
            backend.remove(REFRESH_TOKEN_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Accepts a fixed number of writes, then fails.
    #[derive(Clone, Default)]
    struct FlakyStore {
        inner: MemoryStore,
        writes_left: Rc<Cell<usize>>,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
            if self.writes_left.get() == 0 {
                return Err(AppError::Storage("quota exceeded".to_string()));
            }
            self.writes_left.set(self.writes_left.get() - 1);
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.inner.remove(key);
        }
    }

    #[test]
    fn set_then_get_returns_exact_pair() {
        let store = SessionStore::new(Some(MemoryStore::default()));
        store.set("a1", "r1");
        assert_eq!(store.get(), Session::new("a1", "r1"));
    }

    #[test]
    fn sign_in_response_becomes_the_stored_session() {
        let tokens: TokenPair =
            serde_json::from_str(r#"{"access": "a1", "refresh": "r1"}"#).expect("token pair");
        let store = SessionStore::new(Some(MemoryStore::default()));

        let session = store.sign_in(&tokens);

        assert_eq!(session, Session::new("a1", "r1"));
        assert_eq!(store.get(), session);
    }

    #[test]
    fn clear_removes_both_tokens_and_is_idempotent() {
        let backend = MemoryStore::default();
        let store = SessionStore::new(Some(backend.clone()));
        store.set("a1", "r1");
        store.clear();
        store.clear();

        assert!(store.get().is_empty());
        assert_eq!(backend.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(backend.get(REFRESH_TOKEN_KEY), None);
    }

    #[test]
    fn set_overwrites_previous_pair() {
        let store = SessionStore::new(Some(MemoryStore::default()));
        store.set("a1", "r1");
        store.set("a2", "r2");
        assert_eq!(store.get(), Session::new("a2", "r2"));
    }

    #[test]
    fn failed_second_write_rolls_back_the_first() {
        let backend = FlakyStore::default();
        backend.writes_left.set(1);
        let store = SessionStore::new(Some(backend.clone()));

        store.set("a1", "r1");

        assert!(store.get().is_empty());
        assert_eq!(backend.get(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn torn_pair_reads_as_empty() {
        let backend = MemoryStore::default();
        backend.set(ACCESS_TOKEN_KEY, "a1").expect("memory write");
        let store = SessionStore::new(Some(backend));
        assert_eq!(store.get(), Session::default());
    }

    #[test]
    fn missing_backend_is_always_empty() {
        let store: SessionStore<MemoryStore> = SessionStore::new(None);
        store.set("a1", "r1");
        assert!(store.get().is_empty());
        store.clear();
    }

    #[test]
    fn blank_access_token_is_not_usable() {
        let session = Session::new("  ", "r1");
        assert_eq!(session.access_token(), None);
        assert_eq!(Session::new("a1", "r1").access_token(), Some("a1"));
    }

    #[test]
    fn debug_output_hides_tokens() {
        let rendered = format!("{:?}", Session::new("secret-access", "secret-refresh"));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
