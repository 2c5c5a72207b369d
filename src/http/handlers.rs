//! Route handlers.

use axum::{extract::State, response::Response, Json};

use crate::catalog::ProductList;
use crate::http::request::SubmissionPayload;
use crate::http::response;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::submission::{validate, SubmissionError, SubmissionResult};

/// Plain-text body of `GET /`.
pub const BANNER: &str = "Backend server is running. Try GET /api/products or POST /submit.";

pub async fn banner() -> &'static str {
    BANNER
}

/// `GET /api/products`: the full catalog after the simulated latency.
pub async fn list_products(State(state): State<AppState>) -> Json<ProductList> {
    tokio::time::sleep(state.latency.catalog_delay()).await;
    Json(state.catalog.to_product_list())
}

/// `POST /submit`: validate a name/email pair and echo it back.
///
/// Rejections answer immediately; only accepted submissions wait.
pub async fn submit_form(
    State(state): State<AppState>,
    payload: Result<SubmissionPayload, SubmissionError>,
) -> Result<Json<SubmissionResult>, SubmissionError> {
    let outcome = payload.and_then(|SubmissionPayload(request)| validate(request));
    let submission = match outcome {
        Ok(submission) => submission,
        Err(err) => {
            tracing::debug!(reason = err.kind(), "Submission rejected");
            metrics::record_submission(err.kind());
            return Err(err);
        }
    };

    tracing::info!(
        name = %submission.name,
        email = %submission.email,
        "Submission received"
    );
    metrics::record_submission("accepted");

    tokio::time::sleep(state.latency.submission_delay()).await;
    Ok(Json(SubmissionResult::success(submission)))
}

pub async fn not_found() -> Response {
    response::not_found()
}
