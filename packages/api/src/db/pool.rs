//! Database connection pool using OnceCell pattern.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::settings::Settings;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

#[derive(Debug, Error)]
pub enum DbError {
    #[error("invalid settings: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Get or initialize the database connection pool.
/// Uses `database.url` from the settings (`BIODEX_DATABASE_URL` in the environment).
pub async fn get_pool() -> Result<&'static PgPool, DbError> {
    POOL.get_or_try_init(|| async {
        let settings = Settings::new()?;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&settings.database.url)
            .await?;
        Ok(pool)
    })
    .await
}
