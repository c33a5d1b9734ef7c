use std::sync::Arc;

use quadwords_core::game_id::GameId;
use quadwords_core::store::GameStore;
use tokio::sync::mpsc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Game storage backend.
    pub store: Arc<dyn GameStore>,
    /// Database connection pool, when the store is Postgres-backed.
    /// `None` under the in-memory store used by integration tests.
    pub db: Option<quadwords_db::DbPool>,
    /// Sender side of the generation queue consumed by [`crate::background`].
    pub generation_queue: mpsc::Sender<GameId>,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
}
