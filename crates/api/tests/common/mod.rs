#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use indexmap::IndexMap;
use tokio::sync::mpsc;
use tower::ServiceExt;

use quadwords_api::config::ServerConfig;
use quadwords_api::router::build_app_router;
use quadwords_api::state::AppState;
use quadwords_core::config::GenerationConfig;
use quadwords_core::game_id::GameId;
use quadwords_core::store::MemoryStore;
use quadwords_core::types::{Category, PuzzleData};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        generation: GenerationConfig::default(),
    }
}

/// A fully wired test application.
///
/// Holds the in-memory store for seeding and the receiver side of the
/// generation queue so tests can assert on enqueued ids.
pub struct TestApp {
    pub app: Router,
    pub store: Arc<MemoryStore>,
    pub queue: mpsc::Receiver<GameId>,
}

/// Build the full application router with all middleware layers, backed by
/// an in-memory store.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app() -> TestApp {
    let config = test_config();
    let store = Arc::new(MemoryStore::new());
    let (queue_tx, queue_rx) = mpsc::channel(8);

    let state = AppState {
        store: store.clone(),
        db: None,
        generation_queue: queue_tx,
        config: Arc::new(config.clone()),
    };

    TestApp {
        app: build_app_router(state, &config),
        store,
        queue: queue_rx,
    }
}

/// A valid stored puzzle for seeding the test store.
pub fn sample_puzzle() -> PuzzleData {
    let mut categories = IndexMap::new();
    categories.insert(
        "Boast".to_string(),
        Category {
            hint: "Show off".to_string(),
            words: vec!["CROW", "GLOAT", "PREEN", "STRUT"]
                .into_iter()
                .map(String::from)
                .collect(),
            embedded_substrings: None,
        },
    );
    categories.insert(
        "Shades of blue".to_string(),
        Category {
            hint: "Feeling colourful".to_string(),
            words: vec!["AZURE", "COBALT", "NAVY", "TEAL"]
                .into_iter()
                .map(String::from)
                .collect(),
            embedded_substrings: None,
        },
    );
    categories.insert(
        "Cereal mascots".to_string(),
        Category {
            hint: "Breakfast celebrities".to_string(),
            words: vec!["SAM", "TONY", "SNAP", "POP"]
                .into_iter()
                .map(String::from)
                .collect(),
            embedded_substrings: None,
        },
    );
    categories.insert(
        "___ bear".to_string(),
        Category {
            hint: "Ursine prefixes".to_string(),
            words: vec!["POLAR", "TEDDY", "GUMMY", "MAMA"]
                .into_iter()
                .map(String::from)
                .collect(),
            embedded_substrings: None,
        },
    );

    let word_list = categories
        .values()
        .flat_map(|c| c.words.iter().cloned())
        .collect();

    PuzzleData {
        categories,
        word_list,
    }
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, path: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with an empty body to the app.
pub async fn post(app: Router, path: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
