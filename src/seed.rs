//! Startup seeding of reference data.
//!
//! Genres have no create or edit route; this module is their only writer. It
//! runs before the listener binds, so no request can observe a partial list.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

use crate::entities::genre;

/// Canonical genres, in insertion order.
pub const CANONICAL_GENRES: [&str; 6] = [
    "Action",
    "Aventure",
    "RPG",
    "Simulation",
    "Sport",
    "Stratégie",
];

/// Outcome of a seeding pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: Vec<&'static str>,
    pub existing: Vec<&'static str>,
}

/// Make sure every canonical genre exists exactly once.
///
/// Looks each name up before inserting it, so repeated runs never duplicate rows.
///
/// # Errors
///
/// Returns the first store error; genres seeded before it stay committed.
pub async fn ensure_genres(db: &DatabaseConnection) -> Result<SeedReport, DbErr> {
    let mut report = SeedReport::default();

    for name in CANONICAL_GENRES {
        let existing = genre::Entity::find()
            .filter(genre::Column::Name.eq(name))
            .one(db)
            .await?;

        if existing.is_some() {
            report.existing.push(name);
            continue;
        }

        genre::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        tracing::debug!(genre = name, "seeded genre");
        report.created.push(name);
    }

    tracing::info!(
        created = report.created.len(),
        existing = report.existing.len(),
        "genre seed complete"
    );

    Ok(report)
}
