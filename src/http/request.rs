//! Request handling.
//!
//! # Responsibilities
//! - Generate a UUID v4 request ID when the client sent none
//! - Expose the request ID to spans and handlers
//! - Extract the submission body, turning any JSON rejection into
//!   [`SubmissionError::MalformedPayload`]
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - A client-provided `x-request-id` is kept, not overwritten

use axum::{
    extract::{FromRequest, Request},
    http::{self, HeaderValue},
    Json,
};
use serde_json::{Map, Value};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

use crate::submission::{SubmissionError, SubmissionRequest};

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a random UUID v4 per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Layer assigning an `x-request-id` to every inbound request.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Layer copying the request's `x-request-id` onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

/// Read access to the request ID.
pub trait RequestIdExt {
    /// The request ID, if one was assigned and is valid UTF-8.
    fn request_id(&self) -> Option<&str>;
}

impl<B> RequestIdExt for http::Request<B> {
    fn request_id(&self) -> Option<&str> {
        self.extensions()
            .get::<RequestId>()
            .map(RequestId::header_value)
            .or_else(|| self.headers().get(X_REQUEST_ID))
            .and_then(|v| v.to_str().ok())
    }
}

/// JSON body of `POST /submit`.
///
/// Requires a JSON content type and a JSON object body whose `name` and
/// `email`, when set, are strings or null; anything else is a malformed
/// payload. With duplicate keys the last value wins.
#[derive(Debug, Clone)]
pub struct SubmissionPayload(pub SubmissionRequest);

impl<S> FromRequest<S> for SubmissionPayload
where
    S: Send + Sync,
{
    type Rejection = SubmissionError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Json::<Value>::from_request(req, state).await {
            Ok(Json(body)) => body,
            Err(rejection) => {
                tracing::debug!(
                    status = %rejection.status(),
                    reason = %rejection.body_text(),
                    "Submission body rejected"
                );
                return Err(SubmissionError::MalformedPayload);
            }
        };

        let Value::Object(fields) = body else {
            tracing::debug!("Submission body is not a JSON object");
            return Err(SubmissionError::MalformedPayload);
        };

        Ok(Self(SubmissionRequest {
            name: text_field(&fields, "name")?,
            email: text_field(&fields, "email")?,
        }))
    }
}

/// A string field of the body; absent and null both read as `None`.
fn text_field(fields: &Map<String, Value>, key: &str) -> Result<Option<String>, SubmissionError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(other) => {
            tracing::debug!(field = key, value = %other, "Submission field is not a string");
            Err(SubmissionError::MalformedPayload)
        }
    }
}
