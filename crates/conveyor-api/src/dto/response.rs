//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use conveyor_geometry::SceneNode;

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// A built model with its estimates and a text summary.
#[derive(Debug, Clone, Serialize)]
pub struct GeometryResponse<S: Serialize> {
    pub scene: SceneNode,
    pub specifications: S,
    pub summary: String,
}
