use axum::{
    routing::{get, post},
    Router,
};
use dotenv::dotenv;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::api::cors::{preflight_handler, with_cors_headers};
use crate::api::handlers::{
    manifest_handler, submit_feedback_handler, update_message_handler, update_rating_handler,
};
use crate::api::state::AppState;
use crate::api::{RATING_APP_PATH, UPDATE_MESSAGE_PATH, UPDATE_RATING_PATH};
use crate::config::{AppConfig, DEFAULT_LOG_FILTER};

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json() // JSON format for log shipping
                .with_target(false),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
}

pub fn create_app(state: AppState) -> Router {
    let router = Router::new()
        // Manifest, feedback submission
        .route(
            RATING_APP_PATH,
            get(manifest_handler)
                .post(submit_feedback_handler)
                .options(preflight_handler),
        )
        // Single-field updates
        .route(
            UPDATE_MESSAGE_PATH,
            post(update_message_handler).options(preflight_handler),
        )
        .route(
            UPDATE_RATING_PATH,
            post(update_rating_handler).options(preflight_handler),
        )
        // Health check endpoint
        .route("/health", get(health_check))
        .with_state(state);

    // Add tracing layer for observability
    with_cors_headers(router).layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down gracefully...");
}

pub async fn run_server() -> eyre::Result<()> {
    dotenv().ok();
    init_tracing();

    info!("Starting rating app server");

    let config = AppConfig::from_env()?;
    info!(
        contract = ?config.chain.contract_address,
        chain_id = config.chain.chain_id,
        "Targeting {}",
        config.chain.chain_name
    );

    let app = create_app(AppState::from_config(&config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server listening on {}", addr);

    // Run the server with graceful shutdown
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
