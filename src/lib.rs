//! Storefront backend library.
//!
//! Serves a fixed product catalog and accepts name/email form submissions.

// Domain
pub mod catalog;
pub mod submission;

// Serving
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use catalog::{Catalog, Product};
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use submission::{SubmissionError, SubmissionRequest, SubmissionResult};
