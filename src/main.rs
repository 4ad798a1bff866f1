mod bootstrap;
mod config;
mod dto;
mod handlers;
mod models;
mod repository;
mod service;

use std::sync::Arc;

use handlers::rest;
use service::NoteService;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env();

    // Repository creation and schema sync
    let mut repo = bootstrap::connect_with_retry(&config.database.dsn())
        .await
        .unwrap_or_else(|e| {
            tracing::error!(
                "Failed to establish database connection after {} attempts: {e}",
                bootstrap::MAX_ATTEMPTS
            );
            std::process::exit(1);
        });

    repo.migrate().await.unwrap_or_else(|e| {
        tracing::error!("Failed to synchronize database schema: {e}");
        std::process::exit(1);
    });

    // Service creation and router config
    let service = Arc::new(NoteService::new(Arc::new(repo)));
    let app = rest::router(service);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind port {}: {e}", config.port);
            std::process::exit(1);
        });

    tracing::info!(
        "Server starting, listening on {}",
        listener
            .local_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| format!("port {}", config.port))
    );

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("HTTP server error: {e}");
        std::process::exit(1);
    }
}
