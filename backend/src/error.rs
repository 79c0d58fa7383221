//! Error taxonomy and its mapping onto HTTP responses.
//!
//! Service operations return `TaskError`; handlers attach the request path and
//! let `ApiError` render the structured error body. Storage failures are logged
//! server-side and surfaced as a generic 500 so no internal detail leaks.

use std::panic::AssertUnwindSafe;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures_util::FutureExt;
use shared::ErrorResponse;

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// Malformed input: missing or out-of-range fields, non-positive id.
    #[error("{0}")]
    Validation(String),
    /// The referenced task id does not exist.
    #[error("task with id {0} not found")]
    NotFound(i64),
    /// The backing store failed.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl TaskError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A `TaskError` paired with the path of the request that produced it.
#[derive(Debug)]
pub struct ApiError {
    error: TaskError,
    path: String,
}

impl ApiError {
    pub fn new(error: TaskError, path: impl Into<String>) -> Self {
        Self {
            error,
            path: path.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let message = match &self.error {
            TaskError::Validation(_) | TaskError::NotFound(_) => self.error.to_string(),
            TaskError::Storage(err) => {
                tracing::error!(error = %err, path = %self.path, "storage failure");
                "an unexpected error occurred".to_string()
            }
        };
        let label = status.canonical_reason().unwrap_or("Internal Server Error");
        let body = ErrorResponse::new(status.as_u16(), label, message, self.path);
        (status, Json(body)).into_response()
    }
}

/// Boundary catch-all for anything outside the typed taxonomy. A handler
/// panic (or any other failure that never became a `TaskError`) still renders
/// the structured error body, with a fully generic message.
pub async fn catch_unclassified(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            let detail = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            tracing::error!(%path, %detail, "unclassified failure");
            let body = ErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                "Internal Server Error",
                "an unexpected error occurred",
                path,
            );
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn statuses_follow_the_taxonomy() {
        assert_eq!(
            TaskError::Validation("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(TaskError::NotFound(1).status(), StatusCode::NOT_FOUND);
        let serde_err = serde_json::from_str::<shared::Task>("not json").unwrap_err();
        assert_eq!(
            TaskError::Storage(StoreError::Serde(serde_err)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_names_the_id() {
        assert_eq!(
            TaskError::NotFound(7).to_string(),
            "task with id 7 not found"
        );
    }
}
