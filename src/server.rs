//! HTTP server lifecycle
//!
//! [`start_server`] binds the listener and serves the roster API until
//! Ctrl-C is received. Failing to bind is the only fatal error.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::api::{create_router, AppState};
use crate::config::ServerConfig;

/// Errors that can occur when starting or running the server
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server hit a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

/// Bind to the configured address and serve until shutdown
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))?;

    let router = create_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "roster server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Serve(e.to_string()))?;

    info!("roster server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
