//! Background puzzle generation.
//!
//! Consumes game ids from an in-process queue and drives them through
//! [`Generator::ensure_game`]. HTTP handlers hand ids to this task so
//! requests never wait on the language model.

use std::sync::Arc;

use quadwords_core::game_id::GameId;
use quadwords_core::games::{EnsureOutcome, Generator};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Capacity of the generation queue. Requests beyond this are dropped (and
/// logged); the scheduled worker covers any date that slips through.
pub const GENERATION_QUEUE_CAPACITY: usize = 32;

/// Run the generation queue consumer loop.
///
/// Processes one game at a time until `cancel` is triggered or the sender
/// side is dropped.
pub async fn run(
    generator: Arc<Generator>,
    mut queue: mpsc::Receiver<GameId>,
    cancel: CancellationToken,
) {
    tracing::info!("Generation task started");

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Generation task stopping");
                break;
            }
            maybe_id = queue.recv() => {
                let Some(id) = maybe_id else {
                    tracing::info!("Generation queue closed, stopping");
                    break;
                };
                match generator.ensure_game(id).await {
                    Ok(EnsureOutcome::Created(_)) => {
                        tracing::info!(game_id = %id, "Generated game");
                    }
                    Ok(EnsureOutcome::AlreadyExists) => {
                        tracing::debug!(game_id = %id, "Game already exists, skipping");
                    }
                    Ok(EnsureOutcome::InProgress) => {
                        tracing::debug!(game_id = %id, "Generation already in progress, skipping");
                    }
                    Err(e) => {
                        tracing::error!(game_id = %id, error = %e, "Game generation failed");
                    }
                }
            }
        }
    }
}
