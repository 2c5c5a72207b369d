//! Ordered, fail-fast validation of a submission.
//!
//! The JSON shape check happens earlier, at extraction time; by the time a
//! [`SubmissionRequest`] exists the body was a JSON object.

use crate::submission::error::SubmissionError;
use crate::submission::types::{Submission, SubmissionRequest};

/// Validate a parsed request.
///
/// Presence is checked before email shape; the first failure is returned.
pub fn validate(request: SubmissionRequest) -> Result<Submission, SubmissionError> {
    let (Some(name), Some(email)) = (present(request.name), present(request.email)) else {
        return Err(SubmissionError::MissingField);
    };

    if !has_email_shape(&email) {
        return Err(SubmissionError::InvalidEmailShape);
    }

    Ok(Submission { name, email })
}

/// Substring heuristic: the address must contain both `@` and `.`.
///
/// Not an address grammar. `"@."` passes.
pub fn has_email_shape(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
