use crate::{app_lib::AppError, features::capture::registration::Gender};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A registered user as listed by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub gender: String,
    pub dob: NaiveDate,
    #[serde(default)]
    pub last_attendance: Option<NaiveDate>,
}

/// Full replacement body for `PUT /api/features/users/{id}/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    pub name: String,
    pub email: String,
    pub gender: String,
    pub dob: NaiveDate,
}

/// Editable copy of a user, held as raw strings while the edit dialog is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub gender: String,
    pub dob: String,
}

impl From<&UserRecord> for UserDraft {
    fn from(user: &UserRecord) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            gender: user.gender.clone(),
            dob: user.dob.format(DATE_FORMAT).to_string(),
        }
    }
}

impl UserDraft {
    /// Validates the draft and turns it into a replacement body.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for a blank name, a malformed email, an
    /// unknown gender or a date of birth that is not `YYYY-MM-DD`.
    pub fn to_patch(&self) -> Result<UserPatch, AppError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Name is required.".into()));
        }
        let email = self.email.trim();
        if !email.contains('@') {
            return Err(AppError::Validation("A valid email is required.".into()));
        }
        let gender = Gender::parse(&self.gender)
            .ok_or_else(|| AppError::Validation("Gender is required.".into()))?;
        let dob = NaiveDate::parse_from_str(self.dob.trim(), DATE_FORMAT)
            .map_err(|_| AppError::Validation("Date of birth must be YYYY-MM-DD.".into()))?;

        Ok(UserPatch {
            name: name.to_string(),
            email: email.to_string(),
            gender: gender.as_str().to_string(),
            dob,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_list_entries() {
        let body = r#"[
            {"id": 1, "name": "Ada", "email": "ada@example.com", "gender": "female",
             "dob": "1990-12-10", "last_attendance": "2024-05-01"},
            {"id": 2, "name": "Alan", "email": "alan@example.com", "gender": "male",
             "dob": "1912-06-23", "last_attendance": null}
        ]"#;
        let users: Vec<UserRecord> = serde_json::from_str(body).expect("user list");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].dob, NaiveDate::from_ymd_opt(1990, 12, 10).expect("date"));
        assert_eq!(
            users[0].last_attendance,
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
        assert_eq!(users[1].last_attendance, None);
    }

    #[test]
    fn missing_last_attendance_is_none() {
        let body = r#"{"id": 3, "name": "Grace", "email": "g@example.com", "gender": "female", "dob": "1906-12-09"}"#;
        let user: UserRecord = serde_json::from_str(body).expect("user");
        assert_eq!(user.last_attendance, None);
    }

    #[test]
    fn patch_serializes_all_four_fields() {
        let draft = UserDraft {
            name: " Ada ".into(),
            email: "ada@example.com".into(),
            gender: "female".into(),
            dob: "1990-12-10".into(),
        };
        let json = serde_json::to_value(draft.to_patch().expect("patch")).expect("json");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "gender": "female",
                "dob": "1990-12-10"
            })
        );
    }

    #[test]
    fn bad_dates_are_rejected() {
        let draft = UserDraft {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            gender: "female".into(),
            dob: "12/10/1990".into(),
        };
        assert_eq!(
            draft.to_patch().unwrap_err().to_string(),
            "Date of birth must be YYYY-MM-DD."
        );
    }

    #[test]
    fn draft_starts_from_the_record() {
        let user = UserRecord {
            id: 7,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            gender: "female".into(),
            dob: NaiveDate::from_ymd_opt(1990, 1, 2).expect("date"),
            last_attendance: None,
        };
        let draft = UserDraft::from(&user);
        assert_eq!(draft.dob, "1990-01-02");
        assert_eq!(draft.to_patch().expect("patch").name, "Ada");
    }
}
