//! Loads, deletes and edits registered users.
//!
//! Every mutation is followed by a full reload; the list is never patched
//! locally. State goes through a [`ListView`], and once the view is gone
//! (`try_update` returns `None`) results and notifications are dropped.

use super::{
    client::UsersApi,
    pagination::PaginationWindow,
    types::{UserPatch, UserRecord},
};
use crate::app_lib::{AppError, Outcome};
use thiserror::Error;
use tracing::{debug, warn};

/// State rendered by the users table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserList {
    pub users: Vec<UserRecord>,
    pub loading: bool,
    pub window: PaginationWindow,
}

impl UserList {
    pub fn visible(&self) -> &[UserRecord] {
        self.window.visible(&self.users)
    }

    fn replace(&mut self, users: Vec<UserRecord>) {
        self.users = users;
        self.window.clamp(self.users.len());
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ListError {
    #[error("Failed to fetch users")]
    Fetch(#[source] AppError),
    #[error("Failed to delete user")]
    Delete(#[source] AppError),
    #[error("Failed to update user")]
    Update(#[source] AppError),
}

/// Where the controller writes list state and user-facing notifications.
pub trait ListView {
    /// Applies `f` to the list state, or returns `None` if the view is gone.
    fn try_update<R>(&self, f: impl FnOnce(&mut UserList) -> R) -> Option<R>;

    fn notify(&self, outcome: Outcome);
}

pub struct ResourceListController<A, V> {
    api: A,
    view: V,
}

impl<A: UsersApi, V: ListView> ResourceListController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    /// Replaces the list with the backend's current collection. On failure
    /// the previous list stays in place.
    pub async fn load(&self) -> Result<(), ListError> {
        if self.view.try_update(|list| list.loading = true).is_none() {
            return Ok(());
        }

        match self.api.list().await {
            Ok(users) => {
                debug!(count = users.len(), "users loaded");
                self.view.try_update(|list| {
                    list.replace(users);
                    list.loading = false;
                });
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "users fetch failed");
                let err = ListError::Fetch(err);
                self.view.try_update(|list| list.loading = false);
                self.report(Outcome::failure(err.to_string()));
                Err(err)
            }
        }
    }

    /// Deletes a user, then reloads regardless of the result.
    pub async fn remove(&self, id: i64) -> Result<(), ListError> {
        let result = self.api.delete(id).await.map_err(|err| {
            warn!(id, error = %err, "user delete failed");
            ListError::Delete(err)
        });
        self.report(match &result {
            Ok(()) => Outcome::success("User deleted successfully"),
            Err(err) => Outcome::failure(err.to_string()),
        });
        // A failed reload has already been reported on its own.
        let _ = self.load().await;
        result
    }

    /// Replaces a user's profile, then reloads regardless of the result.
    pub async fn update(&self, id: i64, patch: &UserPatch) -> Result<(), ListError> {
        let result = self.api.update(id, patch).await.map_err(|err| {
            warn!(id, error = %err, "user update failed");
            ListError::Update(err)
        });
        self.report(match &result {
            Ok(()) => Outcome::success("User updated successfully"),
            Err(err) => Outcome::failure(err.to_string()),
        });
        let _ = self.load().await;
        result
    }

    fn report(&self, outcome: Outcome) {
        if self.view.try_update(|_| ()).is_some() {
            self.view.notify(outcome);
        } else {
            debug!(message = %outcome.message, "view gone, dropping notification");
        }
    }
}
