//! Profile fields sent alongside a registration capture.

use crate::app_lib::AppError;
use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|gender| gender.as_str() == value.trim())
    }
}

/// Raw registration inputs as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub gender: Option<Gender>,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`.
    pub dob: String,
}

impl RegistrationForm {
    /// Checks the inputs and returns the multipart text fields in wire order.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` naming the first missing or malformed field.
    pub fn into_fields(self) -> Result<Vec<(String, String)>, AppError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Name is required.".into()));
        }
        let email = self.email.trim();
        if !email.contains('@') {
            return Err(AppError::Validation("A valid email is required.".into()));
        }
        let gender = self
            .gender
            .ok_or_else(|| AppError::Validation("Gender is required.".into()))?;
        let dob = NaiveDate::parse_from_str(self.dob.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Date of birth is required.".into()))?;

        Ok(vec![
            ("name".to_string(), name.to_string()),
            ("email".to_string(), email.to_string()),
            ("gender".to_string(), gender.as_str().to_string()),
            ("dob".to_string(), dob.format("%Y-%m-%d").to_string()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationForm {
        RegistrationForm {
            name: " Ada Lovelace ".to_string(),
            email: "ada@example.com".to_string(),
            gender: Some(Gender::Female),
            dob: "1815-12-10".to_string(),
        }
    }

    #[test]
    fn fields_are_trimmed_and_ordered() {
        let fields = filled().into_fields().expect("valid form");
        let expected: Vec<(String, String)> = [
            ("name", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("gender", "female"),
            ("dob", "1815-12-10"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(fields, expected);
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let mut form = filled();
        form.name = "  ".to_string();
        assert_eq!(
            form.into_fields().unwrap_err().to_string(),
            "Name is required."
        );

        let mut form = filled();
        form.gender = None;
        assert!(form.into_fields().is_err());

        let mut form = filled();
        form.dob = "10/12/1815".to_string();
        assert!(form.into_fields().is_err());
    }

    #[test]
    fn gender_round_trips_through_its_wire_value() {
        for gender in Gender::ALL {
            assert_eq!(Gender::parse(gender.as_str()), Some(gender));
        }
        assert_eq!(Gender::parse("unknown"), None);
    }
}
