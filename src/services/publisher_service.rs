use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::dto::{GameView, PublisherView};
use crate::entities::publisher;
use crate::error::AppError;
use crate::services::GameService;

pub struct PublisherService;

impl PublisherService {
    /// All publishers by name.
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<PublisherView>, AppError> {
        let publishers = publisher::Entity::find()
            .order_by_asc(publisher::Column::Name)
            .all(db)
            .await?;

        Ok(publishers.iter().map(PublisherView::from).collect())
    }

    pub async fn find(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<publisher::Model>, AppError> {
        Ok(publisher::Entity::find_by_id(id).one(db).await?)
    }

    /// A publisher and its games. `None` when the publisher does not exist.
    pub async fn find_with_games(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<(PublisherView, Vec<GameView>)>, AppError> {
        let Some(publisher) = Self::find(db, id).await? else {
            return Ok(None);
        };

        let games = GameService::list_by_publisher(db, publisher.id).await?;
        Ok(Some((PublisherView::from(&publisher), games)))
    }

    pub async fn create(
        db: &DatabaseConnection,
        name: String,
    ) -> Result<publisher::Model, AppError> {
        let publisher = publisher::ActiveModel {
            name: Set(name),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(AppError::from_store)?;

        tracing::info!(publisher_id = publisher.id, name = %publisher.name, "publisher created");
        Ok(publisher)
    }

    /// Rename a publisher. `None` when the publisher is gone.
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        name: String,
    ) -> Result<Option<publisher::Model>, AppError> {
        let Some(publisher) = Self::find(db, id).await? else {
            return Ok(None);
        };

        let mut active: publisher::ActiveModel = publisher.into();
        active.name = Set(name);

        let publisher = active.update(db).await.map_err(AppError::from_store)?;
        Ok(Some(publisher))
    }

    /// Delete a publisher. Returns whether a row was removed.
    ///
    /// A publisher still referenced by games is refused by the store's foreign key
    /// and surfaces as [`AppError::Conflict`].
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, AppError> {
        let result = publisher::Entity::delete_by_id(id)
            .exec(db)
            .await
            .map_err(AppError::from_store)?;

        Ok(result.rows_affected > 0)
    }
}
