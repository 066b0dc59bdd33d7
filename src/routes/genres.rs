use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::get,
};
use serde_json::json;

use crate::{
    error::AppError, services::GenreService, state::AppState, utils::parse_id, views::View,
};

/// Read-only genre router. Genres are managed by the startup seed.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/genres", get(list_genres))
        .route("/genres/{id}", get(genre_detail))
}

/// `GET /genres`: All genres.
async fn list_genres(State(state): State<AppState>) -> Result<Response, AppError> {
    let genres = GenreService::list(&state.db).await?;
    state.views.render(View::GenreList, &json!({ "genres": genres }))
}

/// `GET /genres/:id`: A genre and its games.
async fn genre_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let found = match parse_id(&raw_id) {
        Some(id) => GenreService::find_with_games(&state.db, id).await?,
        None => None,
    };

    match found {
        Some((genre, games)) => state
            .views
            .render(View::GenreDetail, &json!({ "genre": genre, "games": games })),
        None => state.views.render_with_status(
            StatusCode::NOT_FOUND,
            View::GenreDetail,
            &json!({ "genre": null, "games": [] }),
        ),
    }
}
