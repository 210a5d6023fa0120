//! SQL statements for the two reference tables (genres, student_ids).

use crate::error::AppError;
use crate::model::reference::{Genre, StudentId};
use sqlx::PgConnection;

pub async fn list_genres(conn: &mut PgConnection) -> Result<Vec<Genre>, AppError> {
    let rows = sqlx::query_as::<_, Genre>("SELECT id, title FROM genres")
        .fetch_all(conn)
        .await?;
    Ok(rows)
}

pub async fn get_genre(conn: &mut PgConnection, id: i64) -> Result<Option<Genre>, AppError> {
    let row = sqlx::query_as::<_, Genre>("SELECT id, title FROM genres WHERE id = $1")
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(row)
}

pub async fn insert_genre(conn: &mut PgConnection, title: String) -> Result<Genre, AppError> {
    let row = sqlx::query_as::<_, Genre>(
        "INSERT INTO genres (title) VALUES ($1) RETURNING id, title",
    )
    .bind(title)
    .fetch_one(conn)
    .await?;
    Ok(row)
}

pub async fn update_genre(
    conn: &mut PgConnection,
    id: i64,
    title: Option<String>,
) -> Result<Option<Genre>, AppError> {
    let row = match title {
        Some(title) => {
            sqlx::query_as::<_, Genre>(
                "UPDATE genres SET title = $1 WHERE id = $2 RETURNING id, title",
            )
            .bind(title)
            .bind(id)
            .fetch_optional(conn)
            .await?
        }
        None => get_genre(conn, id).await?,
    };
    Ok(row)
}

pub async fn delete_genre(conn: &mut PgConnection, id: i64) -> Result<Option<Genre>, AppError> {
    let row = sqlx::query_as::<_, Genre>(
        "DELETE FROM genres WHERE id = $1 RETURNING id, title",
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(row)
}

pub async fn list_student_ids(conn: &mut PgConnection) -> Result<Vec<StudentId>, AppError> {
    let rows = sqlx::query_as::<_, StudentId>("SELECT id, name FROM student_ids")
        .fetch_all(conn)
        .await?;
    Ok(rows)
}

pub async fn get_student_id(
    conn: &mut PgConnection,
    id: i64,
) -> Result<Option<StudentId>, AppError> {
    let row = sqlx::query_as::<_, StudentId>("SELECT id, name FROM student_ids WHERE id = $1")
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(row)
}

pub async fn insert_student_id(
    conn: &mut PgConnection,
    name: String,
) -> Result<StudentId, AppError> {
    let row = sqlx::query_as::<_, StudentId>(
        "INSERT INTO student_ids (name) VALUES ($1) RETURNING id, name",
    )
    .bind(name)
    .fetch_one(conn)
    .await?;
    Ok(row)
}

pub async fn update_student_id(
    conn: &mut PgConnection,
    id: i64,
    name: Option<String>,
) -> Result<Option<StudentId>, AppError> {
    let row = match name {
        Some(name) => {
            sqlx::query_as::<_, StudentId>(
                "UPDATE student_ids SET name = $1 WHERE id = $2 RETURNING id, name",
            )
            .bind(name)
            .bind(id)
            .fetch_optional(conn)
            .await?
        }
        None => get_student_id(conn, id).await?,
    };
    Ok(row)
}

pub async fn delete_student_id(
    conn: &mut PgConnection,
    id: i64,
) -> Result<Option<StudentId>, AppError> {
    let row = sqlx::query_as::<_, StudentId>(
        "DELETE FROM student_ids WHERE id = $1 RETURNING id, name",
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(row)
}
