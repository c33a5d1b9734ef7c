//! Handlers for the `/games` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use quadwords_core::game_id::{ids_through, GameId};
use quadwords_core::types::{GameSlot, PuzzleView};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/games
///
/// Lists every playable game id, from the first game date through today.
pub async fn list_ids() -> Json<serde_json::Value> {
    let ids = ids_through(Utc::now().date_naive());
    Json(json!({ "gameIds": ids }))
}

/// GET /api/v1/games/{game_id}
///
/// Returns the published puzzle when it exists. A missing puzzle is queued
/// for generation and answered with `202` so clients can poll.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let id = GameId::parse_in_range(&raw_id, Utc::now().date_naive())
        .map_err(|e| AppError::invalid_game_id(&raw_id, &e))?;

    let slot = state.store.get_game(id).await?;

    match slot {
        GameSlot::Ready(data) => {
            Ok((StatusCode::OK, Json(PuzzleView::from(&data))).into_response())
        }
        slot => {
            let ttl = state.config.generation.generation_lock_ttl_secs;
            if !slot.is_fresh_lock(Utc::now(), ttl) {
                enqueue_generation(&state, id);
            }
            Ok(accepted())
        }
    }
}

/// POST /api/v1/games/{game_id}
///
/// Manually triggers generation for a game. The background task re-checks
/// the slot before doing any work, so repeated triggers are harmless.
pub async fn create(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let id = GameId::parse_in_range(&raw_id, Utc::now().date_naive())
        .map_err(|e| AppError::invalid_game_id(&raw_id, &e))?;

    enqueue_generation(&state, id);

    Ok(accepted())
}

fn accepted() -> Response {
    (
        StatusCode::ACCEPTED,
        Json(json!({ "message": "Game is being generated" })),
    )
        .into_response()
}

/// Hand a game id to the background generation task.
///
/// Fire-and-forget: a full or closed queue is logged and the request still
/// gets its `202`. The scheduled worker covers any dropped ids.
fn enqueue_generation(state: &AppState, id: GameId) {
    match state.generation_queue.try_send(id) {
        Ok(()) => {
            tracing::debug!(game_id = %id, "Queued game for generation");
        }
        Err(tokio::sync::mpsc::error::TrySendError::Full(_)) => {
            tracing::warn!(game_id = %id, "Generation queue full, dropping request");
        }
        Err(tokio::sync::mpsc::error::TrySendError::Closed(_)) => {
            tracing::error!(game_id = %id, "Generation queue closed, dropping request");
        }
    }
}
