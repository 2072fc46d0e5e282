//! CSV import and export handlers.

use axum::Json;
use axum::response::Response;

use conveyor_entity::configuration::ConveyorConfiguration;
use conveyor_service::ImportedConfigurations;
use conveyor_service::csv_io;

use crate::error::ApiError;
use crate::handlers::attachment;

/// POST /api/csv/import
pub async fn import(body: String) -> Result<Json<ImportedConfigurations>, ApiError> {
    Ok(Json(csv_io::import(&body)?))
}

/// POST /api/csv/export
pub async fn export(Json(configuration): Json<ConveyorConfiguration>) -> Result<Response, ApiError> {
    let text = csv_io::export(&configuration)?;
    attachment(
        "text/csv",
        csv_io::file_name(configuration.conveyor_type()),
        text,
    )
}
