//! Shared frontend utilities for API access, configuration, errors, logging,
//! outcomes, notifications and build metadata.
//!
//! ## Backend conversations
//!
//! ### Sign-in
//!
//! 1. **Credentials:** The client POSTs `{username, password}` to `/api/auth/signin/`.
//! 2. **Tokens:** The API answers with an `{access, refresh}` pair which is persisted
//!    in `localStorage` under `access_token` / `refresh_token`.
//! 3. **Usage:** Protected calls attach `Authorization: Bearer <access>`. The client
//!    never inspects the token; an expired token is only noticed when the API
//!    rejects a call.
//!
//! ### Face capture
//!
//! Registration and attendance marking both POST a `multipart/form-data` body whose
//! `image` part carries a JPEG frame grabbed from the webcam. Registration adds the
//! profile fields as text parts and requires the bearer token; attendance marking is
//! anonymous.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids duplicated
//! logic in routes and features. Callers must never log token values or captured
//! frames.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod outcome;
#[cfg(target_arch = "wasm32")]
pub(crate) mod telemetry;
#[cfg(target_arch = "wasm32")]
pub(crate) mod theme;
pub(crate) mod toast;

pub(crate) use errors::AppError;
pub(crate) use outcome::{Outcome, OutcomeKind};
