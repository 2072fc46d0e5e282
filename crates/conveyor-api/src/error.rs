//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use conveyor_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Handler error wrapping [`AppError`] so it can become a response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<plugin_cad_import::CadImportError> for ApiError {
    fn from(err: plugin_cad_import::CadImportError) -> Self {
        Self(err.into())
    }
}

impl From<conveyor_service::CsvError> for ApiError {
    fn from(err: conveyor_service::CsvError) -> Self {
        Self(err.into())
    }
}

impl ApiError {
    /// Status code and machine-readable code for an error kind.
    pub fn status_of(kind: ErrorKind) -> (StatusCode, &'static str) {
        match kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = Self::status_of(err.kind);
        if status.is_server_error() {
            tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
        } else if err.is_client_error() {
            tracing::debug!(kind = %err.kind, error = %err.message, "Request rejected");
        }

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}
