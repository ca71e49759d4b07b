//! Server bootstrap and graceful shutdown.

use anyhow::Context;
use ladle_postgres::run_pending_migrations;
use ladle_server::handler::routes;
use ladle_server::service::ServiceState;
use tower_http::trace::TraceLayer;

use crate::config::Cli;
use crate::{TRACING_TARGET_SERVER_SHUTDOWN, TRACING_TARGET_SERVER_STARTUP};

/// Builds the application state, applies migrations, and serves the API
/// until a shutdown signal arrives.
pub async fn serve(cli: Cli) -> anyhow::Result<()> {
    let state = ServiceState::from_config(&cli.service)
        .context("failed to initialize application state")?;

    if cli.skip_migrations {
        tracing::warn!(
            target: TRACING_TARGET_SERVER_STARTUP,
            "skipping database migrations"
        );
    } else {
        run_pending_migrations(state.postgres())
            .await
            .context("failed to run database migrations")?;
    }

    let router = routes(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(cli.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind_addr))?;

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        addr = %cli.bind_addr,
        "listening for connections"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}

/// Resolves when the process receives a shutdown signal.
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %error,
            "failed to listen for shutdown signal"
        );
        return;
    }

    tracing::info!(
        target: TRACING_TARGET_SERVER_SHUTDOWN,
        "shutdown signal received, draining connections"
    );
}
