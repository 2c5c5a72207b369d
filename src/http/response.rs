//! Response handling.
//!
//! # Responsibilities
//! - Map submission rejections to their status code and JSON envelope
//! - Provide the envelope for unknown routes
//!
//! Every error body has the shape `{"status":"error","message":"..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::submission::{SubmissionError, SubmissionResult};

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(SubmissionResult::from(self))).into_response()
    }
}

/// Error envelope for a path with no handler.
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(SubmissionResult::error("not found"))).into_response()
}
