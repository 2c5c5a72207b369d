//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!     → spans.rs (one span per request, tagged with the request ID)
//!
//! Consumers:
//!     → stdout (fmt subscriber)
//!     → Prometheus scrape endpoint (when enabled)
//! ```
//!
//! # Design Decisions
//! - Request ID flows into every request span
//! - Metrics are disabled by default; the facade is a no-op without a recorder

pub mod logging;
pub mod metrics;
pub mod spans;
