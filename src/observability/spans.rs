//! Per-request spans.

use axum::http::Request;
use tracing::Span;

use crate::http::request::RequestIdExt;

/// Span wrapping one HTTP request, tagged with its request ID.
pub fn request_span<B>(request: &Request<B>) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request.request_id().unwrap_or("unknown"),
        method = %request.method(),
        path = %request.uri().path(),
    )
}
