//! Client helpers for the registered-users endpoints. The backend enforces
//! authorization; these calls only attach the caller's bearer token.

use crate::{
    app_lib::AppError,
    features::users::types::{UserPatch, UserRecord},
};

pub const USERS_PATH: &str = "/api/features/users/";

/// Path of a single user resource.
pub fn user_path(id: i64) -> String {
    format!("{USERS_PATH}{id}/")
}

/// Operations the list controller needs from the users endpoints.
pub trait UsersApi {
    async fn list(&self) -> Result<Vec<UserRecord>, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
    async fn update(&self, id: i64, patch: &UserPatch) -> Result<(), AppError>;
}

#[cfg(target_arch = "wasm32")]
pub use http::HttpUsersApi;

#[cfg(target_arch = "wasm32")]
mod http {
    use super::{USERS_PATH, UsersApi, user_path};
    use crate::{
        app_lib::{AppError, api},
        features::users::types::{UserPatch, UserRecord},
    };

    /// Users API over HTTP, authorized with the token captured at construction.
    #[derive(Clone, Debug)]
    pub struct HttpUsersApi {
        token: Option<String>,
    }

    impl HttpUsersApi {
        pub fn new(token: Option<String>) -> Self {
            Self { token }
        }
    }

    impl UsersApi for HttpUsersApi {
        async fn list(&self) -> Result<Vec<UserRecord>, AppError> {
            api::get_json(USERS_PATH, self.token.as_deref()).await
        }

        async fn delete(&self, id: i64) -> Result<(), AppError> {
            api::delete(&user_path(id), self.token.as_deref()).await
        }

        async fn update(&self, id: i64, patch: &UserPatch) -> Result<(), AppError> {
            api::put_json(&user_path(id), patch, self.token.as_deref()).await
        }
    }
}
