//! HTTP handlers for the lead intake endpoint.

use super::AppState;
use crate::domain::LeadSubmission;
use crate::error::LeadError;
use crate::models::{
    ErrorResponse, LeadAcceptedResponse, INTERNAL_ERROR_MESSAGE, METHOD_NOT_ALLOWED_MESSAGE,
};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

impl IntoResponse for LeadError {
    fn into_response(self) -> Response {
        match self {
            LeadError::Invalid(e) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.message()))).into_response()
            }
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(
                    INTERNAL_ERROR_MESSAGE,
                    other.to_string(),
                )),
            )
                .into_response(),
        }
    }
}

/// `POST /api/leads`
///
/// The body is read raw so that malformed JSON surfaces as an internal
/// error instead of an extractor rejection.
pub async fn submit_lead(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    state.metrics.record_received();

    let result = match LeadSubmission::from_body(&body) {
        Ok(submission) => state.service.submit(submission).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(accepted) => {
            state.metrics.record_accepted(&accepted.notification);
            (StatusCode::OK, Json(LeadAcceptedResponse::from(&accepted))).into_response()
        }
        Err(e) if e.is_validation() => {
            state.metrics.record_rejected();
            e.into_response()
        }
        Err(e) => {
            state.metrics.record_internal_error();
            tracing::error!(error = %e, "Failed to process lead");
            e.into_response()
        }
    }
}

/// `OPTIONS /api/leads`: empty 200 so browsers can complete a preflight.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other method on `/api/leads`.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new(METHOD_NOT_ALLOWED_MESSAGE)),
    )
        .into_response()
}

pub async fn health_check() -> &'static str {
    "OK"
}
