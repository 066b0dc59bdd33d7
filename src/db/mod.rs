use std::time::{Duration, Instant};

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Open the catalog store with a pooled connection.
///
/// `SQLite` URLs get a single-connection pool; the file is locked per write anyway.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let pool_size = if database_url.starts_with("sqlite:") {
        1
    } else {
        10
    };

    let mut opts = ConnectOptions::new(database_url);
    opts.max_connections(pool_size)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(false);

    let db = Database::connect(opts).await?;
    Ok(db)
}

/// Round-trip latency of a store ping, or `None` when the store is unreachable.
pub async fn ping(db: &DatabaseConnection) -> Option<Duration> {
    let started = Instant::now();
    match db.ping().await {
        Ok(()) => Some(started.elapsed()),
        Err(err) => {
            tracing::warn!(error = %err, "database ping failed");
            None
        }
    }
}
