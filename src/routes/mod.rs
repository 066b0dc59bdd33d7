mod games;
mod genres;
mod health;
mod publishers;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::Response;
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::views::View;

/// Build the complete application router.
///
/// Structure:
/// - `/`, `/games/...`: game catalog pages and forms
/// - `/genres/...`: read-only genre pages
/// - `/editeurs/...`: publisher pages and forms
/// - `GET /health`: store connectivity check
///
/// Anything else, including a known path with the wrong method, renders the
/// not-found page.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(games::router())
        .merge(genres::router())
        .merge(publishers::router())
        .merge(health::router())
        .fallback(fallback)
        .method_not_allowed_fallback(fallback)
}

async fn fallback(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    tracing::debug!(path = uri.path(), "no route matched");
    not_found_page(&state, uri.path())
}

/// Render the catalog's 404 page for `path`.
fn not_found_page(state: &AppState, path: &str) -> Result<Response, AppError> {
    state
        .views
        .render_with_status(StatusCode::NOT_FOUND, View::NotFound, &json!({ "path": path }))
}
