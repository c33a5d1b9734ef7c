use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quadwords_core::error::StoreError;
use quadwords_core::game_id::GameIdError;
use serde_json::json;

/// Handler-level error. Every variant renders as `{ "error", "code" }` JSON;
/// anything classified 500 is logged in full and answered with a stock
/// message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Maps a rejected game id onto the uniform bad-request message. The
    /// rejection reason goes to the log, not the client, so probing the id
    /// space yields one stable answer.
    pub fn invalid_game_id(raw: &str, err: &GameIdError) -> Self {
        tracing::info!(game_id = raw, reason = %err, "Rejected game id");
        AppError::BadRequest("Invalid gameId".to_string())
    }

    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Store(StoreError::GameNotFound(id)) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", format!("Game {id} not found"))
            }
            // A missing prompt is a deployment defect, not client data.
            AppError::Store(StoreError::PromptNotFound(prompt_id)) => {
                tracing::error!(prompt_id, "Prompt missing from store");
                internal()
            }
            AppError::Store(StoreError::Backend(err)) => {
                tracing::error!(error = %err, "Store backend error");
                internal()
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();
        let body = json!({ "error": message, "code": code });
        (status, axum::Json(body)).into_response()
    }
}
