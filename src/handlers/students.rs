//! Student handlers: extract, validate, open a connection, run one statement.

use crate::db;
use crate::error::AppError;
use crate::model::student::{NewStudent, StudentPatch};
use crate::response;
use crate::service::students;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut conn = db::connect(&state.config).await?;
    let rows = students::list(&mut conn).await?;
    Ok(Json(rows))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db::connect(&state.config).await?;
    let row = students::get(&mut conn, id)
        .await?
        .ok_or(AppError::NotFound("student"))?;
    Ok(Json(row))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewStudent>,
) -> Result<impl IntoResponse, AppError> {
    // Validation happens before any database work.
    let values = payload.validate()?;
    let mut conn = db::connect(&state.config).await?;
    let row = students::insert(&mut conn, values).await?;
    Ok(response::created("student", row))
}

pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<StudentPatch>,
) -> Result<impl IntoResponse, AppError> {
    let changes = payload.validate()?;
    let mut conn = db::connect(&state.config).await?;
    let row = students::update(&mut conn, id, changes)
        .await?
        .ok_or(AppError::NotFound("student"))?;
    Ok(response::mutated("student", row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db::connect(&state.config).await?;
    let row = students::delete(&mut conn, id)
        .await?
        .ok_or(AppError::NotFound("student"))?;
    Ok(response::mutated("student", row))
}
