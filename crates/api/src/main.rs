use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quadwords_api::background;
use quadwords_api::config::ServerConfig;
use quadwords_api::router::build_app_router;
use quadwords_api::state::AppState;
use quadwords_core::games::Generator;
use quadwords_core::store::GameStore;
use quadwords_db::{GameRepo, PromptRepo};
use quadwords_llm::{HttpModelClient, LlmConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quadwords_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = config.port, "Configuration loaded");

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = quadwords_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    quadwords_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    quadwords_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database ready, migrations applied");

    // The generator lives on the background task; handlers only read slots
    // and push ids onto the queue.
    let store: Arc<dyn GameStore> = Arc::new(GameRepo::new(pool.clone()));
    let prompts = Arc::new(PromptRepo::new(pool.clone()));
    let model = Arc::new(HttpModelClient::new(LlmConfig::from_env()));
    let generator = Arc::new(Generator::new(
        Arc::clone(&store),
        prompts,
        model,
        config.generation.clone(),
    ));

    let (queue_tx, queue_rx) = tokio::sync::mpsc::channel(background::GENERATION_QUEUE_CAPACITY);
    let cancel = tokio_util::sync::CancellationToken::new();
    let generation_handle = tokio::spawn(background::run(generator, queue_rx, cancel.clone()));
    tracing::info!("Generation task spawned");

    let state = AppState {
        store,
        db: Some(pool),
        generation_queue: queue_tx,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(config.host.parse().expect("Invalid HOST address"), config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Serving");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // Let an in-flight generation attempt finish its current step before
    // the process exits.
    cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), generation_handle).await;
    tracing::info!("Shutdown complete");
}

/// Resolves when the process is asked to stop: SIGINT always, SIGTERM on
/// Unix (process managers send the latter).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
