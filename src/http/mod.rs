//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, JSON body extraction)
//!     → handlers.rs (catalog, submission, banner)
//!     → response.rs (error envelopes and status codes)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, RequestIdExt, SubmissionPayload, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
