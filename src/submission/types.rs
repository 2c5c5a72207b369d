//! Submission request and result types.

use serde::{Deserialize, Serialize};

use crate::submission::error::SubmissionError;

/// Message returned on the success path.
pub const SUCCESS_MESSAGE: &str = "data received successfully";

/// Inbound body of `POST /submit`.
///
/// Both fields are optional at the parse level; presence is checked by
/// [`validate`](crate::submission::validate). Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl SubmissionRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
}

/// Outcome label in the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Success,
    Error,
}

/// Response envelope of `POST /submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub status: ResultStatus,
    pub message: String,
    /// Echo of the accepted submission; only present on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Submission>,
}

impl SubmissionResult {
    pub fn success(submission: Submission) -> Self {
        Self {
            status: ResultStatus::Success,
            message: SUCCESS_MESSAGE.to_string(),
            data: Some(submission),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResultStatus::Error,
            message: message.into(),
            data: None,
        }
    }
}

impl From<SubmissionError> for SubmissionResult {
    fn from(err: SubmissionError) -> Self {
        Self::error(err.to_string())
    }
}

impl From<Result<Submission, SubmissionError>> for SubmissionResult {
    fn from(outcome: Result<Submission, SubmissionError>) -> Self {
        match outcome {
            Ok(submission) => Self::success(submission),
            Err(err) => err.into(),
        }
    }
}
