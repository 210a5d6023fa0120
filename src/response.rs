//! Success envelopes for mutating operations.
//!
//! List and point reads return bare JSON; create, patch, and delete wrap the
//! affected row as `{"success": true, "<entity>": <row>}`.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::Value;

fn envelope<T: Serialize>(key: &'static str, row: T) -> Value {
    let mut map = serde_json::Map::new();
    map.insert("success".into(), Value::Bool(true));
    map.insert(
        key.into(),
        serde_json::to_value(row).unwrap_or(Value::Null),
    );
    Value::Object(map)
}

/// `201 {"success": true, "<key>": row}` for creates.
pub fn created<T: Serialize>(key: &'static str, row: T) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(envelope(key, row)))
}

/// `200 {"success": true, "<key>": row}` for patches and deletes.
pub fn mutated<T: Serialize>(key: &'static str, row: T) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(envelope(key, row)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_wraps_row_under_key() {
        let (status, Json(body)) = created("student", serde_json::json!({"id": 1}));
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["student"]["id"], 1);
    }

    #[test]
    fn mutated_is_200() {
        let (status, Json(body)) = mutated("book", serde_json::json!({"id": 7}));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["book"]["id"], 7);
    }
}
