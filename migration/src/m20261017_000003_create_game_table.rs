use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Game::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Game::Title).string().not_null())
                    .col(ColumnDef::new(Game::Description).text().null())
                    .col(ColumnDef::new(Game::ReleaseDate).date().null())
                    .col(
                        ColumnDef::new(Game::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Game::GenreId).integer().null())
                    .col(ColumnDef::new(Game::PublisherId).integer().null())
                    // Deleting a referenced genre or publisher is refused by the store.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_genre_id")
                            .from(Game::Table, Game::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_publisher_id")
                            .from(Game::Table, Game::PublisherId)
                            .to(Publisher::Table, Publisher::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Home page filters on featured and sorts by title
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_game_featured_title")
                    .table(Game::Table)
                    .col(Game::Featured)
                    .col(Game::Title)
                    .to_owned(),
            )
            .await?;

        // Reverse lookups for the genre and publisher detail pages
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_game_genre_id")
                    .table(Game::Table)
                    .col(Game::GenreId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_game_publisher_id")
                    .table(Game::Table)
                    .col(Game::PublisherId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Game {
    Table,
    Id,
    Title,
    Description,
    ReleaseDate,
    Featured,
    GenreId,
    PublisherId,
}

#[derive(DeriveIden)]
enum Genre {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Publisher {
    Table,
    Id,
}
