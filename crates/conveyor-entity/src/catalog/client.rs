//! Client-level catalog rows: the client itself, categories, materials
//! and profile series.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A manufacturer whose catalogue is served by the configurator.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(default)]
    pub id: i64,
    /// Short unique code used in URLs (e.g. `NIKO`).
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
    /// Printed catalogue the data was taken from.
    pub catalogue_reference: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

/// A product category within a client catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub client_id: i64,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    /// Catalogue page or page range.
    pub page_reference: Option<String>,
}

/// A material or surface finish.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub client_id: i64,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// A track cross-section size, identified by its series code (e.g. `24.000`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSeries {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub client_id: i64,
    pub series_code: String,
    pub height_mm: f64,
    pub width_mm: f64,
    pub slot_width_mm: f64,
    pub wall_thickness_mm: f64,
    pub max_load_kg: Option<i32>,
    #[serde(default)]
    pub material_id: Option<i64>,
}
