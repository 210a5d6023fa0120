//! Book row and payload types.
//!
//! Canonical schema choice: `publishedAt` is a timestamp (not a Unix integer)
//! and the three free-text fields are nullable.

use crate::error::AppError;
use crate::service::validation::{double_option, optional_non_empty, parse_timestamp, require_non_empty};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub description: Option<String>,
    pub synopsis: Option<String>,
    pub categories: Option<String>,
    /// Optional link into genres; nulled by the database when the genre is
    /// deleted.
    pub genre_id: Option<i64>,
}

/// Create payload. Title, author, and publishedAt are required; text fields
/// and the genre link are optional/nullable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub categories: Option<String>,
    #[serde(default)]
    pub genre_id: Option<i64>,
}

/// Validated insert values with the timestamp parsed.
#[derive(Debug)]
pub struct BookInsert {
    pub title: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub description: Option<String>,
    pub synopsis: Option<String>,
    pub categories: Option<String>,
    pub genre_id: Option<i64>,
}

impl NewBook {
    pub fn validate(self) -> Result<BookInsert, AppError> {
        let published_raw = require_non_empty("publishedAt", self.published_at)?;
        Ok(BookInsert {
            title: require_non_empty("title", self.title)?,
            author: require_non_empty("author", self.author)?,
            published_at: parse_timestamp("publishedAt", &published_raw)?,
            description: self.description,
            synopsis: self.synopsis,
            categories: self.categories,
            genre_id: self.genre_id,
        })
    }
}

/// Patch payload: every field optional. For the nullable columns an explicit
/// `null` clears the value; an absent field leaves it unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub synopsis: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub categories: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub genre_id: Option<Option<i64>>,
}

/// Validated change set for a partial update.
#[derive(Debug, Default)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub description: Option<Option<String>>,
    pub synopsis: Option<Option<String>>,
    pub categories: Option<Option<String>>,
    pub genre_id: Option<Option<i64>>,
}

impl BookChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.published_at.is_none()
            && self.description.is_none()
            && self.synopsis.is_none()
            && self.categories.is_none()
            && self.genre_id.is_none()
    }
}

impl BookPatch {
    pub fn validate(self) -> Result<BookChanges, AppError> {
        Ok(BookChanges {
            title: optional_non_empty("title", self.title)?,
            author: optional_non_empty("author", self.author)?,
            published_at: self
                .published_at
                .as_deref()
                .map(|s| parse_timestamp("publishedAt", s))
                .transpose()?,
            description: self.description,
            synopsis: self.synopsis,
            categories: self.categories,
            genre_id: self.genre_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_accepts_empty_text_fields() {
        let payload: NewBook = serde_json::from_value(serde_json::json!({
            "title": "A",
            "author": "B",
            "publishedAt": "2020-01-01T00:00:00Z",
            "description": "",
            "synopsis": "",
            "categories": ""
        }))
        .unwrap();
        let values = payload.validate().unwrap();
        assert_eq!(values.description.as_deref(), Some(""));
        assert_eq!(values.genre_id, None);
    }

    #[test]
    fn create_payload_requires_title_author_published_at() {
        for body in [
            serde_json::json!({"author": "B", "publishedAt": "2020-01-01T00:00:00Z"}),
            serde_json::json!({"title": "A", "publishedAt": "2020-01-01T00:00:00Z"}),
            serde_json::json!({"title": "A", "author": "B"}),
        ] {
            let payload: NewBook = serde_json::from_value(body).unwrap();
            assert!(payload.validate().is_err());
        }
    }

    #[test]
    fn patch_null_genre_clears_link() {
        let patch: BookPatch =
            serde_json::from_value(serde_json::json!({"genreId": null})).unwrap();
        let changes = patch.validate().unwrap();
        assert_eq!(changes.genre_id, Some(None));
        assert!(!changes.is_empty());
    }
}
