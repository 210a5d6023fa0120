//! Routers: entity CRUD under the versioned prefix, plus health/version.

use crate::handlers::{books, references, students};
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use serde::Serialize;

/// All entity routes. Mounted by the caller under `/api/v1`.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(students::list).post(students::create))
        .route(
            "/students/:id",
            get(students::get)
                .patch(students::patch)
                .delete(students::delete),
        )
        .route("/books", get(books::list).post(books::create))
        .route(
            "/books/:id",
            get(books::get).patch(books::patch).delete(books::delete),
        )
        .route(
            "/genres",
            get(references::list_genres).post(references::create_genre),
        )
        .route(
            "/genres/:id",
            get(references::get_genre)
                .patch(references::patch_genre)
                .delete(references::delete_genre),
        )
        .route(
            "/student-ids",
            get(references::list_student_ids).post(references::create_student_id),
        )
        .route(
            "/student-ids/:id",
            get(references::get_student_id)
                .patch(references::patch_student_id)
                .delete(references::delete_student_id),
        )
        .with_state(state)
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Common routes (no state): GET /health, GET /version.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
}
