//! Handlers for the reference tables. Same five operations as the main
//! entities, over a single label field.

use crate::db;
use crate::error::AppError;
use crate::model::reference::{GenrePatch, NewGenre, NewStudentId, StudentIdPatch};
use crate::response;
use crate::service::references;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn list_genres(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut conn = db::connect(&state.config).await?;
    let rows = references::list_genres(&mut conn).await?;
    Ok(Json(rows))
}

pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db::connect(&state.config).await?;
    let row = references::get_genre(&mut conn, id)
        .await?
        .ok_or(AppError::NotFound("genre"))?;
    Ok(Json(row))
}

pub async fn create_genre(
    State(state): State<AppState>,
    Json(payload): Json<NewGenre>,
) -> Result<impl IntoResponse, AppError> {
    let title = payload.validate()?;
    let mut conn = db::connect(&state.config).await?;
    let row = references::insert_genre(&mut conn, title).await?;
    Ok(response::created("genre", row))
}

pub async fn patch_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<GenrePatch>,
) -> Result<impl IntoResponse, AppError> {
    let title = payload.validate()?;
    let mut conn = db::connect(&state.config).await?;
    let row = references::update_genre(&mut conn, id, title)
        .await?
        .ok_or(AppError::NotFound("genre"))?;
    Ok(response::mutated("genre", row))
}

pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db::connect(&state.config).await?;
    let row = references::delete_genre(&mut conn, id)
        .await?
        .ok_or(AppError::NotFound("genre"))?;
    Ok(response::mutated("genre", row))
}

pub async fn list_student_ids(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db::connect(&state.config).await?;
    let rows = references::list_student_ids(&mut conn).await?;
    Ok(Json(rows))
}

pub async fn get_student_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db::connect(&state.config).await?;
    let row = references::get_student_id(&mut conn, id)
        .await?
        .ok_or(AppError::NotFound("student id"))?;
    Ok(Json(row))
}

pub async fn create_student_id(
    State(state): State<AppState>,
    Json(payload): Json<NewStudentId>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.validate()?;
    let mut conn = db::connect(&state.config).await?;
    let row = references::insert_student_id(&mut conn, name).await?;
    Ok(response::created("studentId", row))
}

pub async fn patch_student_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<StudentIdPatch>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.validate()?;
    let mut conn = db::connect(&state.config).await?;
    let row = references::update_student_id(&mut conn, id, name)
        .await?
        .ok_or(AppError::NotFound("student id"))?;
    Ok(response::mutated("studentId", row))
}

pub async fn delete_student_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db::connect(&state.config).await?;
    let row = references::delete_student_id(&mut conn, id)
        .await?
        .ok_or(AppError::NotFound("student id"))?;
    Ok(response::mutated("studentId", row))
}
