//! Per-request connection factory and table DDL.

use crate::config::AppConfig;
use crate::error::AppError;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgConnection};
use std::str::FromStr;

/// Open a dedicated connection for one request from the passed config.
/// Callers drop it when the request ends; nothing is shared between calls.
pub async fn connect(config: &AppConfig) -> Result<PgConnection, AppError> {
    let opts = PgConnectOptions::from_str(&config.database_url)
        .map_err(|e| AppError::Config(format!("invalid DATABASE_URL: {}", e)))?;
    let conn = opts.connect().await.map_err(AppError::Db)?;
    Ok(conn)
}

/// Table DDL in dependency order: reference tables first, then the tables
/// pointing at them. Both foreign keys are ON DELETE SET NULL, so removing a
/// referenced row clears the link instead of cascading.
const TABLE_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS student_ids (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS students (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        surname VARCHAR(255) NOT NULL,
        birthday_at TIMESTAMPTZ NOT NULL,
        gender VARCHAR(255) NOT NULL,
        student_id BIGINT REFERENCES student_ids(id) ON DELETE SET NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS genres (
        id BIGSERIAL PRIMARY KEY,
        title VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS books (
        id BIGSERIAL PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        author VARCHAR(255) NOT NULL,
        published_at TIMESTAMPTZ NOT NULL,
        description TEXT,
        synopsis TEXT,
        categories TEXT,
        genre_id BIGINT REFERENCES genres(id) ON DELETE SET NULL
    )
    "#,
];

/// Create all tables if missing. Idempotent; run once at startup.
pub async fn ensure_tables(conn: &mut PgConnection) -> Result<(), AppError> {
    for ddl in TABLE_DDL {
        sqlx::query(ddl).execute(&mut *conn).await?;
    }
    Ok(())
}
