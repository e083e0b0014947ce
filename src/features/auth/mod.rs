//! Auth feature module covering sign-in, the persisted token pair and route
//! protection. It keeps authentication logic out of the UI. This module touches
//! security boundaries and must avoid logging secrets or token material.
//!
//! Flow Overview: sign-in POSTs credentials and receives an access/refresh pair,
//! which the session store persists atomically. Protected routes render only
//! while an access token is present; sign-out clears both tokens. Token expiry is
//! never checked client-side.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod guards;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireAuth;
