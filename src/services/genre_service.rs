use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::dto::{GameView, GenreView};
use crate::entities::genre;
use crate::error::AppError;
use crate::services::GameService;

pub struct GenreService;

impl GenreService {
    /// All genres by name.
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<GenreView>, AppError> {
        let genres = genre::Entity::find()
            .order_by_asc(genre::Column::Name)
            .all(db)
            .await?;

        Ok(genres.iter().map(GenreView::from).collect())
    }

    /// A genre and the games filed under it. `None` when the genre does not exist.
    pub async fn find_with_games(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<(GenreView, Vec<GameView>)>, AppError> {
        let Some(genre) = genre::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let games = GameService::list_by_genre(db, genre.id).await?;
        Ok(Some((GenreView::from(&genre), games)))
    }
}
