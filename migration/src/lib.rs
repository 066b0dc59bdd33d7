pub use sea_orm_migration::prelude::*;

mod m20261017_000001_create_genre_table;
mod m20261017_000002_create_publisher_table;
mod m20261017_000003_create_game_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261017_000001_create_genre_table::Migration),
            Box::new(m20261017_000002_create_publisher_table::Migration),
            Box::new(m20261017_000003_create_game_table::Migration),
        ]
    }
}
