//! Field validation helpers.
//!
//! Validation is an explicit step: each payload type offers `validate()` which
//! either yields a typed insert/change set or an `AppError::Validation`. The
//! handler dispatches to the database only after validation succeeds.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Required string field: must be present and non-empty.
pub fn require_non_empty(field: &'static str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        Some(_) => Err(AppError::Validation(format!("{} must not be empty", field))),
        None => Err(AppError::Validation(format!("{} is required", field))),
    }
}

/// Optional string field: when present it must be non-empty.
pub fn optional_non_empty(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, AppError> {
    match value {
        Some(s) if s.is_empty() => {
            Err(AppError::Validation(format!("{} must not be empty", field)))
        }
        other => Ok(other),
    }
}

/// ISO-8601 datetime with an explicit UTC offset, normalized to UTC.
pub fn parse_timestamp(field: &'static str, raw: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            AppError::Validation(format!(
                "{} must be an ISO-8601 datetime with a UTC offset",
                field
            ))
        })
}

/// Deserializer that distinguishes an absent field from an explicit `null`.
/// PATCH uses it for nullable columns: absent leaves the value alone, `null`
/// clears it.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
