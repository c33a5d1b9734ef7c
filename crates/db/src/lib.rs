//! Postgres persistence for quadwords: daily game slots and versioned
//! prompt templates.
//!
//! The repositories implement the storage seams from `quadwords-core`
//! ([`quadwords_core::store::GameStore`], [`quadwords_core::store::PromptStore`]),
//! so everything above this crate stays driver-agnostic.

pub mod models;
pub mod repositories;

pub use repositories::game_repo::GameRepo;
pub use repositories::prompt_repo::PromptRepo;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub type DbPool = PgPool;

/// Creates a connection pool against `database_url`.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Cheap connectivity probe, used at startup and by health checks.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Applies the embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
