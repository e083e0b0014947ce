//! Domain-level frontend features (session, camera, capture, users, attendance)
//! and their shared logic. Routes import these modules to keep view code
//! focused while security, device access and API handling live in dedicated
//! feature areas.

pub(crate) mod attendance;
pub(crate) mod auth;
pub(crate) mod camera;
pub(crate) mod capture;
pub(crate) mod users;
