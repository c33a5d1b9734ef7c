use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

/// GET /health
///
/// Liveness plus a database probe. Deployments without Postgres (the
/// in-memory store) report healthy on the service alone.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match &state.db {
        Some(pool) => quadwords_db::health_check(pool).await.is_ok(),
        None => true,
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
