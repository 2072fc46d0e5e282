//! Route handlers organized by domain.

pub mod cad;
pub mod catalog;
pub mod csv;
pub mod export;
pub mod geometry;
pub mod health;
pub mod quote;

use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::response::Response;

use conveyor_core::error::AppError;

use crate::error::ApiError;

/// A downloadable response with the given content type and file name.
pub(crate) fn attachment(
    content_type: &str,
    file_name: &str,
    body: impl Into<Body>,
) -> Result<Response, ApiError> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
        )
        .body(body.into())
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")).into())
}

/// Run CPU-bound work off the async workers.
pub(crate) async fn blocking<T, F>(work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::internal(format!("Worker task failed: {e}")).into())
}
