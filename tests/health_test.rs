mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn health_reports_connected_database() {
    let (app, _db) = common::test_app().await;
    let res = common::get(&app, "/health").await;

    assert_eq!(res.status, StatusCode::OK);

    let json: serde_json::Value =
        serde_json::from_str(&res.body).unwrap_or(serde_json::Value::Null);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    // SQLite in-memory should report connected
    assert_eq!(json["database"]["connected"], true);
    assert!(json["database"]["latencyMs"].is_number());
}

#[tokio::test]
async fn unknown_route_renders_not_found_page() {
    let (app, _db) = common::test_app().await;
    let res = common::get(&app, "/nonexistent").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body.contains("Page not found"));
    assert!(res.body.contains("/nonexistent"));
}

#[tokio::test]
async fn wrong_method_on_known_path_renders_not_found_page() {
    let (app, _db) = common::test_app().await;

    let res = common::get(&app, "/games/create").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body.contains("Page not found"));

    let res = common::post_form(&app, "/games", &[]).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}
