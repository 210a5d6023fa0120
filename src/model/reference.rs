//! Reference-table rows: a primary key plus a single label.
//!
//! Students point at student_ids, books at genres. Deleting a reference row
//! never deletes dependents; the foreign key is ON DELETE SET NULL.

use crate::error::AppError;
use crate::service::validation::{optional_non_empty, require_non_empty};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Genre {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StudentId {
    pub id: i64,
    pub name: String,
}

/// Create payload for either reference table; the label key differs per table
/// so each gets its own type.
#[derive(Debug, Deserialize)]
pub struct NewGenre {
    pub title: Option<String>,
}

impl NewGenre {
    pub fn validate(self) -> Result<String, AppError> {
        require_non_empty("title", self.title)
    }
}

#[derive(Debug, Deserialize)]
pub struct NewStudentId {
    pub name: Option<String>,
}

impl NewStudentId {
    pub fn validate(self) -> Result<String, AppError> {
        require_non_empty("name", self.name)
    }
}

/// Patch payloads: the single label field, optional.
#[derive(Debug, Default, Deserialize)]
pub struct GenrePatch {
    pub title: Option<String>,
}

impl GenrePatch {
    pub fn validate(self) -> Result<Option<String>, AppError> {
        optional_non_empty("title", self.title)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StudentIdPatch {
    pub name: Option<String>,
}

impl StudentIdPatch {
    pub fn validate(self) -> Result<Option<String>, AppError> {
        optional_non_empty("name", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_requires_title() {
        assert!(NewGenre { title: None }.validate().is_err());
        assert_eq!(
            NewGenre { title: Some("Sci-Fi".into()) }.validate().unwrap(),
            "Sci-Fi"
        );
    }

    #[test]
    fn empty_patch_is_noop() {
        assert_eq!(GenrePatch::default().validate().unwrap(), None);
    }
}
