//! Application error type and its HTTP representation.
//!
//! Every error leaves the service as `{"error": "<message>"}`. Storage failures are
//! reported with a generic message; the underlying detail only reaches the logs.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api::middleware::request_id::RequestId;
use crate::utils::date::DobError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors produced while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input: bad id, bad JSON, failed field constraints, unparsable date.
    #[error("{0}")]
    Validation(String),

    /// No row matched the requested identifier.
    #[error("{0}")]
    NotFound(String),

    /// Any other storage failure (connectivity, constraint violation, ...).
    #[error("database error: {0}")]
    Persistence(#[from] sqlx::Error),

    /// Server-side failure whose message is already safe to expose.
    #[error("{0}")]
    Internal(String),

    /// The request ran past the configured time limit.
    #[error("request timeout")]
    Timeout,

    /// The path exists but not for this HTTP method.
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Logs the error against the request's correlation id and replaces storage
    /// details with a generic `failed to <operation>` message.
    pub fn report(self, request_id: &RequestId, operation: &str) -> Self {
        match self {
            AppError::Persistence(e) => {
                tracing::error!(request_id = %request_id, error = %e, "{operation} failed");
                AppError::internal(format!("failed to {operation}"))
            }
            AppError::Internal(message) => {
                tracing::error!(request_id = %request_id, error = %message, "{operation} failed");
                AppError::Internal(message)
            }
            other => {
                tracing::warn!(request_id = %request_id, error = %other, "{operation} failed");
                other
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Persistence(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Turns a server-side failure into `not_found(message)`, for endpoints whose
    /// only published failure besides 400 is 404. Call after [`AppError::report`].
    pub fn or_not_found(self, message: &str) -> Self {
        match self {
            AppError::Validation(_) | AppError::NotFound(_) => self,
            _ => AppError::not_found(message),
        }
    }

    /// Turns a missing row into `internal("failed to <operation>")`, for endpoints
    /// whose only published failures are 400 and 500. Call after [`AppError::report`].
    pub fn or_internal(self, operation: &str) -> Self {
        match self {
            AppError::NotFound(_) => AppError::internal(format!("failed to {operation}")),
            other => other,
        }
    }
}

impl From<DobError> for AppError {
    fn from(e: DobError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::Persistence(e) => {
                // Reached only when a handler skipped `report`.
                tracing::error!(error = %e, "unreported database error");
                "internal server error".to_string()
            }
            AppError::Validation(message)
            | AppError::NotFound(message)
            | AppError::Internal(message) => message,
            other => other.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
