//! Scheduled puzzle generation worker.
//!
//! Stands in for the cron trigger in deployments without one: on start and
//! then on a fixed interval it makes sure today's puzzle exists, generating
//! it if necessary. Safe to run alongside the API server; the slot check and
//! generation lock keep the two from duplicating work.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quadwords_core::config::GenerationConfig;
use quadwords_core::game_id::GameId;
use quadwords_core::games::{EnsureOutcome, Generator};
use quadwords_db::{GameRepo, PromptRepo};
use quadwords_llm::{HttpModelClient, LlmConfig};

/// Default seconds between generation sweeps.
const DEFAULT_POLL_INTERVAL_SECS: u64 = 3600;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quadwords_worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = GenerationConfig::from_env();

    let poll_interval_secs: u64 = std::env::var("WORKER_POLL_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = quadwords_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    quadwords_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Generation services ---
    let store = Arc::new(GameRepo::new(pool.clone()));
    let prompts = Arc::new(PromptRepo::new(pool));
    let model = Arc::new(HttpModelClient::new(LlmConfig::from_env()));
    let generator = Generator::new(store, prompts, model, config);

    // --- Shutdown signal ---
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl-C, stopping worker");
            signal_cancel.cancel();
        }
    });

    tracing::info!(poll_interval_secs, "Worker started");

    // First tick fires immediately, so today's game is checked on startup.
    let mut interval = tokio::time::interval(Duration::from_secs(poll_interval_secs));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Worker stopping");
                break;
            }
            _ = interval.tick() => {
                sweep(&generator).await;
            }
        }
    }

    tracing::info!("Worker shutdown complete");
}

/// Ensure today's game exists.
async fn sweep(generator: &Generator) {
    let id = GameId::today();

    match generator.ensure_game(id).await {
        Ok(EnsureOutcome::Created(_)) => {
            tracing::info!(game_id = %id, "Generated game");
        }
        Ok(EnsureOutcome::AlreadyExists) => {
            tracing::debug!(game_id = %id, "Game already exists");
        }
        Ok(EnsureOutcome::InProgress) => {
            tracing::debug!(game_id = %id, "Generation already in progress");
        }
        Err(e) => {
            tracing::error!(game_id = %id, error = %e, "Scheduled generation failed");
        }
    }
}
