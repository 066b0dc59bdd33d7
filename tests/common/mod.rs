#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

use game_catalog::config::{Config, Environment};
use game_catalog::state::AppState;
use game_catalog::views::Views;

/// Build the app router backed by a migrated and seeded in-memory `SQLite` database.
///
/// The connection is returned too so tests can inspect the store directly.
pub async fn test_app() -> (Router, DatabaseConnection) {
    let db = sea_orm::Database::connect("sqlite::memory:")
        .await
        .unwrap_or_default();
    Migrator::up(&db, None).await.unwrap_or_default();
    game_catalog::seed::ensure_genres(&db)
        .await
        .unwrap_or_default();

    let state = AppState {
        db: db.clone(),
        config: Config {
            database_url: String::new(),
            server_host: std::net::IpAddr::from([127, 0, 0, 1]),
            server_port: 0,
            environment: Environment::Development,
            log_level: "warn".to_string(),
        },
        views: Views::new().unwrap_or_else(|err| unreachable!("templates must compile: {err}")),
    };

    (game_catalog::routes::router().with_state(state), db)
}

/// Response parts the tests care about.
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();
    let body = String::from_utf8(body.to_vec()).unwrap_or_default();

    TestResponse {
        status,
        location,
        body,
    }
}

/// Test helper: send a GET request to the app.
pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_default();

    send(app, request).await
}

/// Test helper: POST an urlencoded form, as a browser would.
pub async fn post_form(app: &Router, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap_or_default();

    send(app, request).await
}

/// Test helper: POST a raw body, with an optional content type.
pub async fn post_raw(
    app: &Router,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> TestResponse {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }

    let request = builder
        .body(Body::from(body.to_string()))
        .unwrap_or_default();

    send(app, request).await
}
