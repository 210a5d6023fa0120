//! campus-api: REST backend for students and books over PostgreSQL.
//!
//! Two resource controllers (students, books) plus their reference tables
//! (student-ids, genres), each exposing list, get, create, patch, delete.
//! Every request opens its own database handle from the passed configuration.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use state::AppState;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Allow-list CORS: a matching origin is reflected back, anything else gets
/// no allow-origin header.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(86_400))
}

/// Build the application router: entity routes under /api/v1, CORS on top.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    Router::new()
        .merge(routes::common_routes())
        .nest("/api/v1", routes::api_routes(state))
        .layer(cors)
}

/// Ensure tables exist, bind, and serve until the process is stopped.
pub async fn serve(config: AppConfig) -> Result<(), AppError> {
    let mut conn = db::connect(&config).await?;
    db::ensure_tables(&mut conn).await?;
    drop(conn);

    let bind_addr = config.bind_addr.clone();
    let app = build_router(AppState { config });
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            config: AppConfig {
                // Never connected to: these tests stop before any database work.
                database_url: "postgres://localhost/campus_unused".into(),
                bind_addr: "127.0.0.1:0".into(),
                allowed_origins: vec!["http://localhost:5173".into()],
            },
        }
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/courses")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_create_short_circuits_before_database() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/students")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name": "Ada"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "validation_error");
    }

    #[tokio::test]
    async fn invalid_book_timestamp_is_validation_error() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/books")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"title": "A", "author": "B", "publishedAt": "2020-01-01"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn allowed_origin_is_reflected_on_preflight() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/v1/students")
                    .header("origin", "http://localhost:5173")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:5173")
        );
    }

    #[tokio::test]
    async fn unknown_origin_gets_no_allow_origin_header() {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/v1/students")
                    .header("origin", "https://evil.example.com")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.headers().get("access-control-allow-origin").is_none());
    }
}
