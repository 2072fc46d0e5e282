//! CAD drawing upload handler.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde_json::json;
use tracing::info;

use conveyor_core::error::AppError;
use plugin_cad_import::CadFormat;

use crate::error::ApiError;
use crate::handlers::blocking;
use crate::state::AppState;

/// First file field of a multipart body.
async fn first_file(mut multipart: Multipart) -> Result<Option<(String, Bytes)>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let Some(file_name) = field.file_name().map(String::from) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
        return Ok(Some((file_name, data)));
    }
    Ok(None)
}

/// POST /api/import/cad
///
/// Rejected uploads answer with the standard error body; drawings that
/// fail to parse answer 400 with `{error}`.
pub async fn import(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let multipart = multipart.map_err(|_| AppError::validation("Expected form data"))?;
    let (file_name, data) = first_file(multipart)
        .await?
        .ok_or_else(|| AppError::validation("No file uploaded"))?;
    CadFormat::from_file_name(&file_name)?;

    info!(file_name = %file_name, bytes = data.len(), "CAD upload received");
    let importer = state.cad_importer.clone();
    let outcome = blocking(move || importer.try_import(&file_name, &data)).await?;

    match outcome {
        Ok(result) => Ok(Json(result).into_response()),
        Err(err) if err.is_rejected_upload() => Err(err.into()),
        Err(err) => {
            tracing::warn!(error = %err, "CAD import failed");
            Ok((StatusCode::BAD_REQUEST, Json(json!({ "error": err.to_string() }))).into_response())
        }
    }
}
