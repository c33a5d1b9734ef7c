pub mod games;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /games                 list playable game ids
/// /games/{game_id}       fetch puzzle (GET), trigger generation (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/games", games::router())
}
