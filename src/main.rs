//! Storefront backend.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request ID → trace → CORS → timeout
//!                                                   │
//!                          ┌────────────────────────┼─────────────────────┐
//!                          ▼                        ▼                     ▼
//!                    GET /api/products         POST /submit             GET /
//!                    catalog (read-only)       JSON check → validate    banner
//!                    + 1s latency              + 0.5s latency on success
//! ```
//!
//! Usage: `storefront-backend [--config <path>]`

use std::path::PathBuf;

use clap::Parser;

use storefront_backend::config::{self, ObservabilityConfig};
use storefront_backend::lifecycle::{self, signals, Shutdown};
use storefront_backend::observability::logging;

#[derive(Parser)]
#[command(name = "storefront-backend")]
#[command(about = "Product catalog and form submission backend", long_about = None)]
struct Cli {
    /// TOML config file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            logging::init_logging(&ObservabilityConfig::default())?;
            tracing::error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };

    logging::init_logging(&config.observability)?;

    tracing::info!("storefront-backend v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        catalog_delay_ms = config.latency.catalog_delay_ms,
        submission_delay_ms = config.latency.submission_delay_ms,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    signals::spawn_signal_watcher(shutdown.clone());

    if let Err(e) = lifecycle::start(config, &shutdown).await {
        tracing::error!(error = %e, "Startup failed");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
