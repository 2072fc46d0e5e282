//! Parametric model handlers.

use axum::Json;

use conveyor_entity::configuration::{OverheadConfig, RollerConfig};
use conveyor_geometry::{
    OverheadSpecifications, RollerSpecifications, build_overhead, build_roller,
};
use conveyor_service::export::summary;

use crate::dto::response::GeometryResponse;
use crate::error::ApiError;
use crate::handlers::blocking;

/// POST /api/geometry/roller
pub async fn roller(
    Json(config): Json<RollerConfig>,
) -> Result<Json<GeometryResponse<RollerSpecifications>>, ApiError> {
    let response = blocking(move || {
        build_roller(&config).map(|scene| GeometryResponse {
            scene,
            specifications: RollerSpecifications::from_config(&config),
            summary: summary::roller(&config),
        })
    })
    .await??;
    Ok(Json(response))
}

/// POST /api/geometry/overhead
pub async fn overhead(
    Json(config): Json<OverheadConfig>,
) -> Result<Json<GeometryResponse<OverheadSpecifications>>, ApiError> {
    let response = blocking(move || {
        build_overhead(&config).map(|scene| GeometryResponse {
            scene,
            specifications: OverheadSpecifications::from_config(&config),
            summary: summary::overhead(&config),
        })
    })
    .await??;
    Ok(Json(response))
}
