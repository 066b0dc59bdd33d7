use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde_json::json;

use super::not_found_page;
use crate::{
    dto::{GameForm, GameView},
    error::AppError,
    extract::PageForm,
    services::GameService,
    state::AppState,
    utils::parse_id,
    views::View,
};

/// Game catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/games", get(list_games))
        .route("/games/new", get(new_game_form))
        .route("/games/create", post(create_game))
        .route("/games/{id}", get(game_detail))
        .route("/games/{id}/edit", get(edit_game_form))
        .route("/games/{id}/update", post(update_game))
        .route("/games/{id}/delete", post(delete_game))
}

// ============================================================================
// Handlers
// ============================================================================

/// `GET /`: Featured games.
async fn home(State(state): State<AppState>) -> Result<Response, AppError> {
    let games = GameService::list_featured(&state.db).await?;
    state.views.render(View::Home, &json!({ "games": games }))
}

/// `GET /games`: Every game, by title.
async fn list_games(State(state): State<AppState>) -> Result<Response, AppError> {
    let games = GameService::list_all(&state.db).await?;
    state.views.render(View::GameList, &json!({ "games": games }))
}

/// `GET /games/new`: Empty game form.
async fn new_game_form(State(state): State<AppState>) -> Result<Response, AppError> {
    let (genres, publishers) = GameService::form_options(&state.db, None, None).await?;

    state.views.render(
        View::GameForm,
        &json!({ "game": null, "genres": genres, "publishers": publishers }),
    )
}

/// `GET /games/:id`: Game detail, or a 404 page with no game.
async fn game_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let game: Option<GameView> = match parse_id(&raw_id) {
        Some(id) => GameService::find_view(&state.db, id).await?,
        None => None,
    };

    match game {
        Some(game) => state.views.render(View::GameDetail, &json!({ "game": game })),
        None => state.views.render_with_status(
            StatusCode::NOT_FOUND,
            View::GameDetail,
            &json!({ "game": null }),
        ),
    }
}

/// `GET /games/:id/edit`: Pre-filled game form; unknown games go back home.
async fn edit_game_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let game = match parse_id(&raw_id) {
        Some(id) => GameService::find_view(&state.db, id).await?,
        None => None,
    };

    let Some(game) = game else {
        return Ok(Redirect::to("/").into_response());
    };

    let (genres, publishers) = GameService::form_options(
        &state.db,
        game.genre.as_ref().map(|g| g.id),
        game.publisher.as_ref().map(|p| p.id),
    )
    .await?;

    state.views.render(
        View::GameForm,
        &json!({ "game": game, "genres": genres, "publishers": publishers }),
    )
}

/// `POST /games/create`: Insert a game and return to the catalog.
async fn create_game(
    State(state): State<AppState>,
    PageForm(form): PageForm<GameForm>,
) -> Result<Response, AppError> {
    GameService::create(&state.db, form.into()).await?;
    Ok(Redirect::to("/games").into_response())
}

/// `POST /games/:id/update`: Replace a game's fields and show it.
async fn update_game(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    uri: Uri,
    PageForm(form): PageForm<GameForm>,
) -> Result<Response, AppError> {
    let updated = match parse_id(&raw_id) {
        Some(id) => GameService::update(&state.db, id, form.into()).await?,
        None => None,
    };

    match updated {
        Some(game) => Ok(Redirect::to(&format!("/games/{}", game.id)).into_response()),
        None => not_found_page(&state, uri.path()),
    }
}

/// `POST /games/:id/delete`: Delete a game; unknown ids are a no-op.
async fn delete_game(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let removed = match parse_id(&raw_id) {
        Some(id) => GameService::delete(&state.db, id).await?,
        None => false,
    };

    if removed {
        tracing::info!(game_id = %raw_id, "game deleted");
    } else {
        tracing::warn!(game_id = %raw_id, "delete requested for unknown game");
    }

    Ok(Redirect::to("/games").into_response())
}
