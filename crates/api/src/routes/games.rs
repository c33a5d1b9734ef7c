//! Route definitions for the `/games` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

/// Routes mounted at `/games`.
///
/// ```text
/// GET    /              -> list_ids
/// GET    /{game_id}     -> get_by_id
/// POST   /{game_id}     -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(games::list_ids))
        .route("/{game_id}", get(games::get_by_id).post(games::create))
}
