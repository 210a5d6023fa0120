//! Student row and payload types.

use crate::error::AppError;
use crate::service::validation::{
    double_option, optional_non_empty, parse_timestamp, require_non_empty,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the students table. JSON uses camelCase; columns are snake_case.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub birthday_at: DateTime<Utc>,
    pub gender: String,
    /// Optional link into student_ids; nulled by the database when the
    /// referenced row is deleted.
    pub student_id: Option<i64>,
}

/// Create payload. Core fields are required; the reference link is optional.
/// Fields arrive as options so `validate` can report which one is missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birthday_at: Option<String>,
    pub gender: Option<String>,
    #[serde(default)]
    pub student_id: Option<i64>,
}

/// Validated insert values with the timestamp parsed.
#[derive(Debug)]
pub struct StudentInsert {
    pub name: String,
    pub surname: String,
    pub birthday_at: DateTime<Utc>,
    pub gender: String,
    pub student_id: Option<i64>,
}

impl NewStudent {
    pub fn validate(self) -> Result<StudentInsert, AppError> {
        let birthday_raw = require_non_empty("birthdayAt", self.birthday_at)?;
        Ok(StudentInsert {
            name: require_non_empty("name", self.name)?,
            surname: require_non_empty("surname", self.surname)?,
            birthday_at: parse_timestamp("birthdayAt", &birthday_raw)?,
            gender: require_non_empty("gender", self.gender)?,
            student_id: self.student_id,
        })
    }
}

/// Patch payload: every field optional. An explicit `null` studentId clears
/// the link; an absent one leaves it unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birthday_at: Option<String>,
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub student_id: Option<Option<i64>>,
}

/// Validated change set for a partial update.
#[derive(Debug, Default)]
pub struct StudentChanges {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birthday_at: Option<DateTime<Utc>>,
    pub gender: Option<String>,
    pub student_id: Option<Option<i64>>,
}

impl StudentChanges {
    /// An empty patch is a valid no-op.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.surname.is_none()
            && self.birthday_at.is_none()
            && self.gender.is_none()
            && self.student_id.is_none()
    }
}

impl StudentPatch {
    pub fn validate(self) -> Result<StudentChanges, AppError> {
        Ok(StudentChanges {
            name: optional_non_empty("name", self.name)?,
            surname: optional_non_empty("surname", self.surname)?,
            birthday_at: self
                .birthday_at
                .as_deref()
                .map(|s| parse_timestamp("birthdayAt", s))
                .transpose()?,
            gender: optional_non_empty("gender", self.gender)?,
            student_id: self.student_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_validates() {
        let payload: NewStudent = serde_json::from_value(serde_json::json!({
            "name": "Ada",
            "surname": "Lovelace",
            "birthdayAt": "1815-12-10T00:00:00Z",
            "gender": "female"
        }))
        .unwrap();
        let values = payload.validate().unwrap();
        assert_eq!(values.name, "Ada");
        assert_eq!(values.student_id, None);
    }

    #[test]
    fn create_payload_missing_field_is_validation_error() {
        let payload: NewStudent =
            serde_json::from_value(serde_json::json!({"name": "Ada"})).unwrap();
        let err = payload.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn patch_distinguishes_null_from_absent() {
        let with_null: StudentPatch =
            serde_json::from_value(serde_json::json!({"studentId": null})).unwrap();
        assert_eq!(with_null.student_id, Some(None));

        let absent: StudentPatch = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(absent.student_id, None);
    }

    #[test]
    fn empty_patch_validates_to_empty_changes() {
        let patch: StudentPatch = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(patch.validate().unwrap().is_empty());
    }

    #[test]
    fn patch_rejects_bad_timestamp() {
        let patch: StudentPatch =
            serde_json::from_value(serde_json::json!({"birthdayAt": "yesterday"})).unwrap();
        assert!(patch.validate().is_err());
    }
}
