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
    dto::{PublisherForm, PublisherView},
    error::AppError,
    extract::PageForm,
    services::PublisherService,
    state::AppState,
    utils::parse_id,
    views::View,
};

/// Publisher router, served under the public `/editeurs` prefix.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/editeurs", get(list_publishers))
        .route("/editeurs/new", get(new_publisher_form))
        .route("/editeurs/create", post(create_publisher))
        .route("/editeurs/{id}", get(publisher_detail))
        .route("/editeurs/{id}/edit", get(edit_publisher_form))
        .route("/editeurs/{id}/update", post(update_publisher))
        .route("/editeurs/{id}/delete", post(delete_publisher))
}

/// `GET /editeurs`: All publishers.
async fn list_publishers(State(state): State<AppState>) -> Result<Response, AppError> {
    let publishers = PublisherService::list(&state.db).await?;
    state
        .views
        .render(View::PublisherList, &json!({ "publishers": publishers }))
}

/// `GET /editeurs/new`: Empty publisher form.
async fn new_publisher_form(State(state): State<AppState>) -> Result<Response, AppError> {
    state
        .views
        .render(View::PublisherForm, &json!({ "publisher": null }))
}

/// `POST /editeurs/create`
async fn create_publisher(
    State(state): State<AppState>,
    PageForm(form): PageForm<PublisherForm>,
) -> Result<Response, AppError> {
    PublisherService::create(&state.db, form.name).await?;
    Ok(Redirect::to("/editeurs").into_response())
}

/// `GET /editeurs/:id`: A publisher and its games.
async fn publisher_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let found = match parse_id(&raw_id) {
        Some(id) => PublisherService::find_with_games(&state.db, id).await?,
        None => None,
    };

    match found {
        Some((publisher, games)) => state.views.render(
            View::PublisherDetail,
            &json!({ "publisher": publisher, "games": games }),
        ),
        None => state.views.render_with_status(
            StatusCode::NOT_FOUND,
            View::PublisherDetail,
            &json!({ "publisher": null, "games": [] }),
        ),
    }
}

/// `GET /editeurs/:id/edit`: Pre-filled form; unknown publishers go back to the list.
async fn edit_publisher_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let publisher = match parse_id(&raw_id) {
        Some(id) => PublisherService::find(&state.db, id).await?,
        None => None,
    };

    let Some(publisher) = publisher else {
        return Ok(Redirect::to("/editeurs").into_response());
    };

    state.views.render(
        View::PublisherForm,
        &json!({ "publisher": PublisherView::from(&publisher) }),
    )
}

/// `POST /editeurs/:id/update`: Rename and show the publisher.
async fn update_publisher(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    uri: Uri,
    PageForm(form): PageForm<PublisherForm>,
) -> Result<Response, AppError> {
    let updated = match parse_id(&raw_id) {
        Some(id) => PublisherService::update(&state.db, id, form.name).await?,
        None => None,
    };

    match updated {
        Some(publisher) => {
            Ok(Redirect::to(&format!("/editeurs/{}", publisher.id)).into_response())
        }
        None => not_found_page(&state, uri.path()),
    }
}

/// `POST /editeurs/:id/delete`: Delete unless games still reference it.
async fn delete_publisher(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let removed = match parse_id(&raw_id) {
        Some(id) => PublisherService::delete(&state.db, id).await?,
        None => false,
    };

    if removed {
        tracing::info!(publisher_id = %raw_id, "publisher deleted");
    } else {
        tracing::warn!(publisher_id = %raw_id, "delete requested for unknown publisher");
    }

    Ok(Redirect::to("/editeurs").into_response())
}
