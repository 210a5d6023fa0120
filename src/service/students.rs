//! SQL statements for the students table. One statement per operation, no
//! transactions; the caller owns the connection.

use crate::error::AppError;
use crate::model::student::{Student, StudentChanges, StudentInsert};
use sqlx::PgConnection;

const COLUMNS: &str = "id, name, surname, birthday_at, gender, student_id";

pub async fn list(conn: &mut PgConnection) -> Result<Vec<Student>, AppError> {
    let sql = format!("SELECT {} FROM students", COLUMNS);
    tracing::debug!(sql = %sql, "list students");
    let rows = sqlx::query_as::<_, Student>(&sql).fetch_all(conn).await?;
    Ok(rows)
}

pub async fn get(conn: &mut PgConnection, id: i64) -> Result<Option<Student>, AppError> {
    let sql = format!("SELECT {} FROM students WHERE id = $1", COLUMNS);
    tracing::debug!(sql = %sql, id, "get student");
    let row = sqlx::query_as::<_, Student>(&sql)
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(row)
}

pub async fn insert(
    conn: &mut PgConnection,
    values: StudentInsert,
) -> Result<Student, AppError> {
    let sql = format!(
        "INSERT INTO students (name, surname, birthday_at, gender, student_id) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {}",
        COLUMNS
    );
    tracing::debug!(sql = %sql, "insert student");
    let row = sqlx::query_as::<_, Student>(&sql)
        .bind(values.name)
        .bind(values.surname)
        .bind(values.birthday_at)
        .bind(values.gender)
        .bind(values.student_id)
        .fetch_one(conn)
        .await?;
    Ok(row)
}

/// Partial update: only present fields land in the SET clause. An empty
/// change set is a no-op that still reports whether the row exists.
pub async fn update(
    conn: &mut PgConnection,
    id: i64,
    changes: StudentChanges,
) -> Result<Option<Student>, AppError> {
    if changes.is_empty() {
        return get(conn, id).await;
    }

    let mut set = Vec::new();
    let mut idx = 1u32;
    for (present, column) in [
        (changes.name.is_some(), "name"),
        (changes.surname.is_some(), "surname"),
        (changes.birthday_at.is_some(), "birthday_at"),
        (changes.gender.is_some(), "gender"),
        (changes.student_id.is_some(), "student_id"),
    ] {
        if present {
            set.push(format!("{} = ${}", column, idx));
            idx += 1;
        }
    }
    let sql = format!(
        "UPDATE students SET {} WHERE id = ${} RETURNING {}",
        set.join(", "),
        idx,
        COLUMNS
    );
    tracing::debug!(sql = %sql, id, "update student");

    // Binds in the same order the SET clause was built.
    let mut query = sqlx::query_as::<_, Student>(&sql);
    if let Some(v) = changes.name {
        query = query.bind(v);
    }
    if let Some(v) = changes.surname {
        query = query.bind(v);
    }
    if let Some(v) = changes.birthday_at {
        query = query.bind(v);
    }
    if let Some(v) = changes.gender {
        query = query.bind(v);
    }
    if let Some(v) = changes.student_id {
        query = query.bind(v);
    }
    let row = query.bind(id).fetch_optional(conn).await?;
    Ok(row)
}

/// Delete by id, returning the row's prior state.
pub async fn delete(conn: &mut PgConnection, id: i64) -> Result<Option<Student>, AppError> {
    let sql = format!("DELETE FROM students WHERE id = $1 RETURNING {}", COLUMNS);
    tracing::debug!(sql = %sql, id, "delete student");
    let row = sqlx::query_as::<_, Student>(&sql)
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(row)
}
