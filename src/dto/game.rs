use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dto::{GenreView, PublisherView};
use crate::entities::{game, genre, publisher};
use crate::utils::{
    Checkbox, format_release_date, parse_optional_id, parse_optional_text, parse_release_date,
};

// ============ Request DTOs ============

/// Body of `POST /games/create` and `POST /games/{id}/update`.
///
/// Every field arrives as text. Legacy field names from older form markup are
/// accepted as aliases.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameForm {
    #[serde(default, alias = "titre")]
    pub title: String,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub genre_id: Option<String>,
    #[serde(alias = "editorId", alias = "editeurId")]
    pub publisher_id: Option<String>,
    #[serde(alias = "isFeatured")]
    pub featured: Option<String>,
}

/// Coerced game fields, ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInput {
    pub title: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub featured: bool,
    pub genre_id: Option<i32>,
    pub publisher_id: Option<i32>,
}

impl From<GameForm> for GameInput {
    fn from(form: GameForm) -> Self {
        Self {
            release_date: parse_release_date(form.release_date.as_deref()),
            featured: Checkbox::from_form(form.featured.as_deref()).is_checked(),
            genre_id: parse_optional_id(form.genre_id.as_deref()),
            publisher_id: parse_optional_id(form.publisher_id.as_deref()),
            description: parse_optional_text(form.description),
            title: form.title,
        }
    }
}

// ============ View DTOs ============

/// A game as the templates see it, with its genre and publisher joined.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    /// `YYYY-MM-DD`, or `null` when unknown
    pub release_date: Option<String>,
    pub featured: bool,
    pub genre: Option<GenreView>,
    pub publisher: Option<PublisherView>,
}

impl GameView {
    #[must_use]
    pub fn new(
        game: game::Model,
        genre: Option<&genre::Model>,
        publisher: Option<&publisher::Model>,
    ) -> Self {
        Self {
            id: game.id,
            release_date: format_release_date(game.release_date),
            title: game.title,
            description: game.description,
            featured: game.featured,
            genre: genre.map(GenreView::from),
            publisher: publisher.map(PublisherView::from),
        }
    }
}
