//! SQLite database creation and connection pooling.

use crate::config::ServerConfig;
use crate::error::AppError;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};
use std::str::FromStr;

/// Create the database file named by `database_url` if it does not exist yet.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    if !Sqlite::database_exists(database_url).await? {
        tracing::info!(database_url, "creating database");
        Sqlite::create_database(database_url).await?;
    }
    Ok(())
}

/// Open a pool against the configured database with foreign keys enforced.
pub async fn connect(config: &ServerConfig) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Private in-memory database on a single pinned connection.
///
/// Every SQLite `:memory:` connection is its own database, so the pool never
/// opens a second one and never retires the first.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    Ok(pool)
}
