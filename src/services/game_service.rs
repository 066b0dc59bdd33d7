use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::dto::{GameInput, GameView, SelectOption};
use crate::entities::{game, genre, publisher};
use crate::error::AppError;

pub struct GameService;

impl GameService {
    /// Featured games for the home page, by title.
    pub async fn list_featured(db: &DatabaseConnection) -> Result<Vec<GameView>, AppError> {
        let games = game::Entity::find()
            .filter(game::Column::Featured.eq(true))
            .order_by_asc(game::Column::Title)
            .all(db)
            .await?;

        Self::join_references(db, games).await
    }

    /// The whole catalog, by title.
    pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<GameView>, AppError> {
        let games = game::Entity::find()
            .order_by_asc(game::Column::Title)
            .all(db)
            .await?;

        Self::join_references(db, games).await
    }

    /// Games referencing a genre, by title.
    pub async fn list_by_genre(
        db: &DatabaseConnection,
        genre_id: i32,
    ) -> Result<Vec<GameView>, AppError> {
        let games = game::Entity::find()
            .filter(game::Column::GenreId.eq(genre_id))
            .order_by_asc(game::Column::Title)
            .all(db)
            .await?;

        Self::join_references(db, games).await
    }

    /// Games referencing a publisher, by title.
    pub async fn list_by_publisher(
        db: &DatabaseConnection,
        publisher_id: i32,
    ) -> Result<Vec<GameView>, AppError> {
        let games = game::Entity::find()
            .filter(game::Column::PublisherId.eq(publisher_id))
            .order_by_asc(game::Column::Title)
            .all(db)
            .await?;

        Self::join_references(db, games).await
    }

    /// Raw game row by ID.
    pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<game::Model>, AppError> {
        Ok(game::Entity::find_by_id(id).one(db).await?)
    }

    /// Game by ID with its genre and publisher joined.
    pub async fn find_view(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<GameView>, AppError> {
        let Some(game) = Self::find(db, id).await? else {
            return Ok(None);
        };

        Ok(Self::join_references(db, vec![game]).await?.pop())
    }

    /// Genre and publisher choices for the game form, flagged against the current references.
    pub async fn form_options(
        db: &DatabaseConnection,
        genre_id: Option<i32>,
        publisher_id: Option<i32>,
    ) -> Result<(Vec<SelectOption>, Vec<SelectOption>), AppError> {
        let genres = genre::Entity::find()
            .order_by_asc(genre::Column::Name)
            .all(db)
            .await?
            .into_iter()
            .map(|g| SelectOption::new(g.id, g.name, genre_id))
            .collect();

        let publishers = publisher::Entity::find()
            .order_by_asc(publisher::Column::Name)
            .all(db)
            .await?
            .into_iter()
            .map(|p| SelectOption::new(p.id, p.name, publisher_id))
            .collect();

        Ok((genres, publishers))
    }

    /// Insert a new game.
    pub async fn create(
        db: &DatabaseConnection,
        input: GameInput,
    ) -> Result<game::Model, AppError> {
        let game = game::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            release_date: Set(input.release_date),
            featured: Set(input.featured),
            genre_id: Set(input.genre_id),
            publisher_id: Set(input.publisher_id),
            ..Default::default()
        };

        let game = game.insert(db).await.map_err(AppError::from_store)?;
        tracing::info!(game_id = game.id, title = %game.title, "game created");
        Ok(game)
    }

    /// Replace every editable field of an existing game. `None` when the game is gone.
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: GameInput,
    ) -> Result<Option<game::Model>, AppError> {
        let Some(game) = Self::find(db, id).await? else {
            return Ok(None);
        };

        let mut active: game::ActiveModel = game.into();
        active.title = Set(input.title);
        active.description = Set(input.description);
        active.release_date = Set(input.release_date);
        active.featured = Set(input.featured);
        active.genre_id = Set(input.genre_id);
        active.publisher_id = Set(input.publisher_id);

        let game = active.update(db).await.map_err(AppError::from_store)?;
        tracing::info!(game_id = game.id, "game updated");
        Ok(Some(game))
    }

    /// Delete a game. Returns whether a row was removed.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, AppError> {
        let result = game::Entity::delete_by_id(id)
            .exec(db)
            .await
            .map_err(AppError::from_store)?;

        Ok(result.rows_affected > 0)
    }

    /// Attach genre and publisher rows to each game with one query per table.
    async fn join_references(
        db: &DatabaseConnection,
        games: Vec<game::Model>,
    ) -> Result<Vec<GameView>, AppError> {
        if games.is_empty() {
            return Ok(Vec::new());
        }

        let genre_ids: Vec<i32> = games.iter().filter_map(|g| g.genre_id).collect();
        let publisher_ids: Vec<i32> = games.iter().filter_map(|g| g.publisher_id).collect();

        let genres: HashMap<i32, genre::Model> = if genre_ids.is_empty() {
            HashMap::new()
        } else {
            genre::Entity::find()
                .filter(genre::Column::Id.is_in(genre_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|g| (g.id, g))
                .collect()
        };

        let publishers: HashMap<i32, publisher::Model> = if publisher_ids.is_empty() {
            HashMap::new()
        } else {
            publisher::Entity::find()
                .filter(publisher::Column::Id.is_in(publisher_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect()
        };

        Ok(games
            .into_iter()
            .map(|game| {
                let genre = game.genre_id.and_then(|id| genres.get(&id));
                let publisher = game.publisher_id.and_then(|id| publishers.get(&id));
                GameView::new(game, genre, publisher)
            })
            .collect())
    }
}
