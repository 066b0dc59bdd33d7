mod common;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

use game_catalog::entities::genre;
use game_catalog::seed::{CANONICAL_GENRES, ensure_genres};

async fn empty_db() -> DatabaseConnection {
    let db = sea_orm::Database::connect("sqlite::memory:")
        .await
        .unwrap_or_default();
    Migrator::up(&db, None).await.unwrap_or_default();
    db
}

async fn genre_names(db: &DatabaseConnection) -> Vec<String> {
    genre::Entity::find()
        .order_by_asc(genre::Column::Id)
        .all(db)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|g| g.name)
        .collect()
}

#[tokio::test]
async fn first_run_creates_every_canonical_genre_in_order() {
    let db = empty_db().await;

    let report = ensure_genres(&db).await.unwrap_or_default();

    assert_eq!(report.created, CANONICAL_GENRES.to_vec());
    assert!(report.existing.is_empty());
    assert_eq!(genre_names(&db).await, CANONICAL_GENRES.to_vec());
}

#[tokio::test]
async fn repeated_runs_never_duplicate_genres() {
    let db = empty_db().await;

    for _ in 0..5 {
        assert!(ensure_genres(&db).await.is_ok());
    }

    assert_eq!(genre_names(&db).await, CANONICAL_GENRES.to_vec());

    let report = ensure_genres(&db).await.unwrap_or_default();
    assert!(report.created.is_empty());
    assert_eq!(report.existing.len(), CANONICAL_GENRES.len());
}

#[tokio::test]
async fn only_missing_genres_are_created() {
    let db = empty_db().await;
    let inserted = genre::ActiveModel {
        name: ActiveValue::Set("RPG".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await;
    assert!(inserted.is_ok());

    let report = ensure_genres(&db).await.unwrap_or_default();

    assert_eq!(report.existing, vec!["RPG"]);
    assert_eq!(report.created.len(), CANONICAL_GENRES.len() - 1);
    assert!(!report.created.contains(&"RPG"));

    let names = genre_names(&db).await;
    assert_eq!(names.len(), CANONICAL_GENRES.len());
    assert_eq!(names.iter().filter(|n| *n == "RPG").count(), 1);
}

#[tokio::test]
async fn test_app_is_seeded_with_rpg_as_third_genre() {
    let (_app, db) = common::test_app().await;

    let rpg = genre::Entity::find_by_id(3).one(&db).await.ok().flatten();
    assert_eq!(rpg.map(|g| g.name).as_deref(), Some("RPG"));
}
