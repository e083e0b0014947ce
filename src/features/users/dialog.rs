//! Modal state for the delete confirmation and edit dialogs.
//!
//! Only one dialog is open at a time. Confirming closes the dialog before the
//! caller starts any request, so a second click cannot submit twice.

use super::types::{UserDraft, UserPatch, UserRecord};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListDialog {
    #[default]
    Closed,
    ConfirmDelete {
        id: i64,
        name: String,
    },
    Edit {
        id: i64,
        draft: UserDraft,
        error: Option<String>,
    },
}

/// Mutation released by a confirmed dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingMutation {
    Delete(i64),
    Update(i64, UserPatch),
}

impl ListDialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, ListDialog::Closed)
    }

    /// Opens the delete confirmation. Ignored while another dialog is open.
    pub fn open_delete(&mut self, user: &UserRecord) -> bool {
        if self.is_open() {
            return false;
        }
        *self = ListDialog::ConfirmDelete {
            id: user.id,
            name: user.name.clone(),
        };
        true
    }

    /// Opens the edit form pre-filled from `user`. Ignored while another
    /// dialog is open.
    pub fn open_edit(&mut self, user: &UserRecord) -> bool {
        if self.is_open() {
            return false;
        }
        *self = ListDialog::Edit {
            id: user.id,
            draft: UserDraft::from(user),
            error: None,
        };
        true
    }

    /// Mutable access to the edit draft, if the edit dialog is open.
    pub fn draft_mut(&mut self) -> Option<&mut UserDraft> {
        match self {
            ListDialog::Edit { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ListDialog::Edit { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = ListDialog::Closed;
    }

    /// Closes the dialog and yields its mutation. An invalid edit draft keeps
    /// the dialog open with an inline error and yields nothing.
    pub fn confirm(&mut self) -> Option<PendingMutation> {
        match std::mem::take(self) {
            ListDialog::Closed => None,
            ListDialog::ConfirmDelete { id, .. } => Some(PendingMutation::Delete(id)),
            ListDialog::Edit { id, draft, .. } => match draft.to_patch() {
                Ok(patch) => Some(PendingMutation::Update(id, patch)),
                Err(err) => {
                    *self = ListDialog::Edit {
                        id,
                        draft,
                        error: Some(err.to_string()),
                    };
                    None
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn user(id: i64) -> UserRecord {
        UserRecord {
            id,
            name: format!("User {id}"),
            email: format!("user{id}@example.com"),
            gender: "other".into(),
            dob: NaiveDate::from_ymd_opt(2000, 1, 1).expect("date"),
            last_attendance: None,
        }
    }

    #[test]
    fn second_dialog_is_ignored_while_one_is_open() {
        let mut dialog = ListDialog::default();
        assert!(dialog.open_delete(&user(1)));
        assert!(!dialog.open_edit(&user(2)));
        assert!(!dialog.open_delete(&user(3)));
        assert_eq!(
            dialog,
            ListDialog::ConfirmDelete {
                id: 1,
                name: "User 1".into()
            }
        );
    }

    #[test]
    fn confirm_delete_closes_and_yields_id() {
        let mut dialog = ListDialog::default();
        dialog.open_delete(&user(4));
        assert_eq!(dialog.confirm(), Some(PendingMutation::Delete(4)));
        assert!(!dialog.is_open());
        assert_eq!(dialog.confirm(), None);
    }

    #[test]
    fn confirm_edit_yields_the_patch() {
        let mut dialog = ListDialog::default();
        dialog.open_edit(&user(5));
        if let Some(draft) = dialog.draft_mut() {
            draft.name = "Renamed".into();
        }
        match dialog.confirm() {
            Some(PendingMutation::Update(5, patch)) => assert_eq!(patch.name, "Renamed"),
            other => panic!("unexpected mutation {other:?}"),
        }
        assert!(!dialog.is_open());
    }

    #[test]
    fn invalid_date_keeps_edit_open() {
        let mut dialog = ListDialog::default();
        dialog.open_edit(&user(6));
        if let Some(draft) = dialog.draft_mut() {
            draft.dob = "not a date".into();
        }
        assert_eq!(dialog.confirm(), None);
        assert!(dialog.is_open());
        assert_eq!(dialog.error(), Some("Date of birth must be YYYY-MM-DD."));
        assert_eq!(dialog.draft_mut().map(|d| d.dob.clone()), Some("not a date".into()));
    }

    #[test]
    fn cancel_closes_without_mutation() {
        let mut dialog = ListDialog::default();
        dialog.open_edit(&user(7));
        dialog.cancel();
        assert!(!dialog.is_open());
        assert!(dialog.open_delete(&user(8)));
    }
}
