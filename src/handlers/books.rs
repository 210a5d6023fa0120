//! Book handlers.

use crate::db;
use crate::error::AppError;
use crate::model::book::{BookPatch, NewBook};
use crate::response;
use crate::service::books;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut conn = db::connect(&state.config).await?;
    let rows = books::list(&mut conn).await?;
    Ok(Json(rows))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db::connect(&state.config).await?;
    let row = books::get(&mut conn, id)
        .await?
        .ok_or(AppError::NotFound("book"))?;
    Ok(Json(row))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewBook>,
) -> Result<impl IntoResponse, AppError> {
    let values = payload.validate()?;
    let mut conn = db::connect(&state.config).await?;
    let row = books::insert(&mut conn, values).await?;
    Ok(response::created("book", row))
}

pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<BookPatch>,
) -> Result<impl IntoResponse, AppError> {
    let changes = payload.validate()?;
    let mut conn = db::connect(&state.config).await?;
    let row = books::update(&mut conn, id, changes)
        .await?
        .ok_or(AppError::NotFound("book"))?;
    Ok(response::mutated("book", row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = db::connect(&state.config).await?;
    let row = books::delete(&mut conn, id)
        .await?
        .ok_or(AppError::NotFound("book"))?;
    Ok(response::mutated("book", row))
}
