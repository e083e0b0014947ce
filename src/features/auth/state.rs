//! Session context shared through Leptos. The provider reads the persisted
//! token pair once on mount and mirrors it in a signal so guards and the app
//! shell re-render on sign-in and sign-out. Only the provider's `sign_in` and
//! `sign_out` write the store.

use crate::features::auth::{
    guards::is_allowed,
    session::{Session, SessionStore},
    types::TokenPair,
};
use leptos::prelude::*;
use tracing::info;

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Session>,
    pub is_authenticated: Signal<bool>,
}

impl SessionContext {
    fn new(session: RwSignal<Session>) -> Self {
        let is_authenticated = Signal::derive(move || session.with(is_allowed));
        Self {
            session,
            is_authenticated,
        }
    }

    /// Persists a fresh token pair and publishes it.
    pub fn sign_in(&self, tokens: &TokenPair) {
        self.session.set(SessionStore::browser().sign_in(tokens));
        info!("signed in");
    }

    /// Clears both tokens from storage and memory.
    pub fn sign_out(&self) {
        SessionStore::browser().clear();
        self.session.set(Session::default());
        info!("signed out");
    }

    /// Access token for an API call, read without subscribing.
    pub fn access_token(&self) -> Option<String> {
        self.session
            .with_untracked(|session| session.access_token().map(ToString::to_string))
    }
}

/// Provides the session context, hydrated from storage on mount.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(SessionStore::browser().get());
    provide_context(SessionContext::new(session));

    view! { {children()} }
}

/// Returns the current session context or a fallback built from storage.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        let session = RwSignal::new(SessionStore::browser().get());
        SessionContext::new(session)
    })
}
