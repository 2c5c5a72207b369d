//! Form submission subsystem.
//!
//! # Data Flow
//! ```text
//! POST /submit
//!     → http::request::SubmissionPayload (JSON shape check)
//!     → validator.rs (presence check, email shape check)
//!     → SubmissionResult (success echo or error message)
//! ```
//!
//! # Design Decisions
//! - Checks run in a fixed order and stop at the first failure
//! - Accepted values are echoed verbatim, never trimmed or normalized
//! - Nothing is stored; receipt is only logged

pub mod error;
pub mod types;
pub mod validator;

pub use error::SubmissionError;
pub use types::{ResultStatus, Submission, SubmissionRequest, SubmissionResult};
pub use validator::{has_email_shape, validate};
