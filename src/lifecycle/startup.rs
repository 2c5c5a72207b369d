//! Startup orchestration.
//!
//! # Responsibilities
//! - Start the metrics exporter when enabled
//! - Bind the listener and begin accepting traffic
//!
//! Config loading and logging happen in `main` before this runs, so that
//! failures here are already logged.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::observability::metrics;

/// Fatal startup failure.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("failed to install metrics exporter: {0}")]
    Metrics(#[from] metrics::BuildError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

fn parse_addr(address: &str) -> Result<SocketAddr, StartupError> {
    address.parse().map_err(|source| StartupError::Address {
        address: address.to_string(),
        source,
    })
}

/// Bind the configured listen address.
pub async fn bind(config: &ServiceConfig) -> Result<TcpListener, StartupError> {
    let address = parse_addr(&config.listener.bind_address)?;
    TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind { address, source })
}

/// Start every subsystem and serve until `shutdown` fires.
pub async fn start(config: ServiceConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr = parse_addr(&config.observability.metrics_address)?;
        metrics::init_metrics(addr)?;
    }

    let listener = bind(&config).await?;
    let local_addr = listener.local_addr().map_err(StartupError::Serve)?;
    tracing::info!(address = %local_addr, "Listening for connections");

    HttpServer::new(config)
        .run(listener, shutdown.subscribe())
        .await
        .map_err(StartupError::Serve)
}
