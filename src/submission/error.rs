//! Submission rejection reasons.

use axum::http::StatusCode;
use thiserror::Error;

/// Why a submission was rejected.
///
/// The display text is the message returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Body is not JSON, or not an object of the expected shape.
    #[error("request must be JSON format")]
    MalformedPayload,

    /// `name` or `email` is absent, null or empty.
    #[error("name and email are required fields")]
    MissingField,

    /// `email` lacks an `@` or a `.`.
    #[error("email format is incorrect")]
    InvalidEmailShape,
}

impl SubmissionError {
    /// HTTP status reported for this rejection.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SubmissionError::MalformedPayload
            | SubmissionError::MissingField
            | SubmissionError::InvalidEmailShape => StatusCode::BAD_REQUEST,
        }
    }

    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionError::MalformedPayload => "malformed_payload",
            SubmissionError::MissingField => "missing_field",
            SubmissionError::InvalidEmailShape => "invalid_email_shape",
        }
    }
}
