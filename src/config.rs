//! Environment-backed configuration, passed explicitly into every request.

use crate::error::AppError;

/// Origins allowed when `ALLOWED_ORIGINS` is unset (local dev frontends).
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:5173", "http://127.0.0.1:5173"];

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string. Every request opens its own handle from this.
    pub database_url: String,
    pub bind_addr: String,
    /// CORS allow-list; only these origins get a reflected allow-origin header.
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Read configuration from the environment. `DATABASE_URL` is required.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| AppError::Config("DATABASE_URL is not set".into()))?;
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
        let allowed_origins = match std::env::var("ALLOWED_ORIGINS") {
            Ok(raw) => parse_origins(&raw),
            Err(_) => DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };
        Ok(AppConfig {
            database_url,
            bind_addr,
            allowed_origins,
        })
    }
}

/// Split a comma-separated origin list, dropping empty entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_origins() {
        let origins = parse_origins("https://app.example.com, http://localhost:5173");
        assert_eq!(
            origins,
            vec!["https://app.example.com", "http://localhost:5173"]
        );
    }

    #[test]
    fn drops_empty_origin_entries() {
        let origins = parse_origins("http://localhost:5173,, ");
        assert_eq!(origins, vec!["http://localhost:5173"]);
    }
}
