//! STEP and JSON export handlers.

use axum::Json;
use axum::extract::State;
use axum::response::Response;
use validator::Validate;

use conveyor_core::error::AppError;
use conveyor_entity::configuration::{OverheadConfig, RollerConfig};
use conveyor_service::ExportService;
use conveyor_service::export::step::STEP_CONTENT_TYPE;

use crate::dto::request::JsonExportRequest;
use crate::error::ApiError;
use crate::handlers::{attachment, blocking};
use crate::state::AppState;

/// POST /api/export/step
pub async fn roller_step(
    State(state): State<AppState>,
    Json(config): Json<RollerConfig>,
) -> Result<Response, ApiError> {
    config.validate().map_err(AppError::from)?;
    let rollers = config.roller_count();
    let exporter = state.exporter;
    let file = blocking(move || exporter.roller_step(&config)).await?;
    tracing::info!(rollers, "Generated roller STEP file");
    attachment(STEP_CONTENT_TYPE, file.file_name, file.content)
}

/// POST /api/export/overhead-step
pub async fn overhead_step(
    State(state): State<AppState>,
    Json(config): Json<OverheadConfig>,
) -> Result<Response, ApiError> {
    config.validate().map_err(AppError::from)?;
    let (carriers, drive_units) = (config.num_carriers, config.drive_units);
    let exporter = state.exporter;
    let file = blocking(move || exporter.overhead_step(&config)).await?;
    tracing::info!(carriers, drive_units, "Generated overhead STEP file");
    attachment(STEP_CONTENT_TYPE, file.file_name, file.content)
}

/// POST /api/export/json
pub async fn json_dump(
    State(state): State<AppState>,
    Json(req): Json<JsonExportRequest>,
) -> Result<Response, ApiError> {
    let configuration = req.into_configuration();
    configuration.validate()?;
    let text = state.exporter.json_dump(&configuration)?;
    attachment(
        "application/json",
        ExportService::json_file_name(configuration.conveyor_type()),
        text,
    )
}
