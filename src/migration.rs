//! Apply the embedded schema migrations (`migrations/`) to the database.

use crate::error::AppError;
use sqlx::migrate::Migrator;
use sqlx::SqlitePool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create `bakeries` and `baked_goods`. Idempotent: applied versions are recorded in `_sqlx_migrations`.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    MIGRATOR.run(pool).await?;
    tracing::info!(count = MIGRATOR.iter().count(), "database migrations applied");
    Ok(())
}
