pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use std::sync::Arc;

use anyhow::Context;

use app::AppState;
use infrastructure::config::ServiceConfig;
use presentation::router::build_router;

/// Build the runtime described by `config` and serve until Ctrl-C.
pub fn run(config: ServiceConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .enable_all()
        .build()
        .context("Failed to build async runtime")?;

    runtime.block_on(serve(config))
}

pub async fn serve(config: ServiceConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let app_state = Arc::new(AppState::new(&config)?);
    let router = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        "Token counter listening on http://{} ({} workers)",
        addr,
        config.worker_threads
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(error) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", error);
            }
            tracing::info!("Token counter shutting down...");
        })
        .await
        .context("HTTP server failed")
}
