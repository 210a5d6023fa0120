//! SQL statements for the books table.

use crate::error::AppError;
use crate::model::book::{Book, BookChanges, BookInsert};
use sqlx::PgConnection;

const COLUMNS: &str =
    "id, title, author, published_at, description, synopsis, categories, genre_id";

pub async fn list(conn: &mut PgConnection) -> Result<Vec<Book>, AppError> {
    let sql = format!("SELECT {} FROM books", COLUMNS);
    tracing::debug!(sql = %sql, "list books");
    let rows = sqlx::query_as::<_, Book>(&sql).fetch_all(conn).await?;
    Ok(rows)
}

pub async fn get(conn: &mut PgConnection, id: i64) -> Result<Option<Book>, AppError> {
    let sql = format!("SELECT {} FROM books WHERE id = $1", COLUMNS);
    tracing::debug!(sql = %sql, id, "get book");
    let row = sqlx::query_as::<_, Book>(&sql)
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(row)
}

pub async fn insert(conn: &mut PgConnection, values: BookInsert) -> Result<Book, AppError> {
    let sql = format!(
        "INSERT INTO books (title, author, published_at, description, synopsis, categories, genre_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
        COLUMNS
    );
    tracing::debug!(sql = %sql, "insert book");
    let row = sqlx::query_as::<_, Book>(&sql)
        .bind(values.title)
        .bind(values.author)
        .bind(values.published_at)
        .bind(values.description)
        .bind(values.synopsis)
        .bind(values.categories)
        .bind(values.genre_id)
        .fetch_one(conn)
        .await?;
    Ok(row)
}

/// Partial update: only present fields land in the SET clause. Nullable
/// columns bind an inner Option, so an explicit null clears the value.
pub async fn update(
    conn: &mut PgConnection,
    id: i64,
    changes: BookChanges,
) -> Result<Option<Book>, AppError> {
    if changes.is_empty() {
        return get(conn, id).await;
    }

    let mut set = Vec::new();
    let mut idx = 1u32;
    for (present, column) in [
        (changes.title.is_some(), "title"),
        (changes.author.is_some(), "author"),
        (changes.published_at.is_some(), "published_at"),
        (changes.description.is_some(), "description"),
        (changes.synopsis.is_some(), "synopsis"),
        (changes.categories.is_some(), "categories"),
        (changes.genre_id.is_some(), "genre_id"),
    ] {
        if present {
            set.push(format!("{} = ${}", column, idx));
            idx += 1;
        }
    }
    let sql = format!(
        "UPDATE books SET {} WHERE id = ${} RETURNING {}",
        set.join(", "),
        idx,
        COLUMNS
    );
    tracing::debug!(sql = %sql, id, "update book");

    let mut query = sqlx::query_as::<_, Book>(&sql);
    if let Some(v) = changes.title {
        query = query.bind(v);
    }
    if let Some(v) = changes.author {
        query = query.bind(v);
    }
    if let Some(v) = changes.published_at {
        query = query.bind(v);
    }
    if let Some(v) = changes.description {
        query = query.bind(v);
    }
    if let Some(v) = changes.synopsis {
        query = query.bind(v);
    }
    if let Some(v) = changes.categories {
        query = query.bind(v);
    }
    if let Some(v) = changes.genre_id {
        query = query.bind(v);
    }
    let row = query.bind(id).fetch_optional(conn).await?;
    Ok(row)
}

/// Delete by id, returning the row's prior state.
pub async fn delete(conn: &mut PgConnection, id: i64) -> Result<Option<Book>, AppError> {
    let sql = format!("DELETE FROM books WHERE id = $1 RETURNING {}", COLUMNS);
    tracing::debug!(sql = %sql, id, "delete book");
    let row = sqlx::query_as::<_, Book>(&sql)
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(row)
}
