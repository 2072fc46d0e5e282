//! Health check handler.

use axum::Json;
use chrono::Utc;

use crate::dto::response::HealthResponse;

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}
