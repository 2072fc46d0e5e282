//! Part family rows.
//!
//! Dimensions are millimetres, loads kilograms, temperatures °C. Optional
//! dimensions are those the printed catalogue leaves blank for some parts.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Columns every part family carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRef {
    #[serde(default)]
    pub client_id: i64,
    /// Catalogue part number, unique per client within a family.
    pub part_number: String,
    #[serde(default)]
    pub series_id: Option<i64>,
    #[serde(default)]
    pub material_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Straight track profile sold by length.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TrackProfile {
    #[serde(default)]
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub catalog: CatalogRef,
    pub length_mm: Option<f64>,
    pub price_per_meter: Option<f64>,
}

/// Horizontal or vertical track bend.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TrackBend {
    #[serde(default)]
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub catalog: CatalogRef,
    pub angle_degrees: i32,
    pub radius_mm: f64,
    pub dimension_a_mm: Option<f64>,
    pub total_length_mm: Option<f64>,
}

/// Mounting bracket, splice joint or support.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Bracket {
    #[serde(default)]
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub catalog: CatalogRef,
    pub bracket_type: String,
    pub length_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub width_mm: Option<f64>,
    pub wall_thickness_mm: Option<f64>,
    pub hole_diameter_mm: Option<f64>,
    pub thread_size: Option<String>,
    pub max_adjustment_mm: Option<f64>,
}

/// Load-carrying trolley running inside the track.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Trolley {
    #[serde(default)]
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub catalog: CatalogRef,
    pub trolley_type: String,
    pub wheel_count: i32,
    pub safe_working_load_kg: i32,
    pub length_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub width_mm: Option<f64>,
    pub hole_diameter_mm: Option<f64>,
    pub thread_size: Option<String>,
    #[serde(default)]
    pub has_rotating_screw: bool,
    #[serde(default)]
    pub has_guide_rollers: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FlightBar {
    #[serde(default)]
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub catalog: CatalogRef,
    pub flight_bar_type: String,
    pub safe_working_load_kg: i32,
    pub length_mm: f64,
    pub span_mm: f64,
    pub height_mm: Option<f64>,
    pub eye_nut_diameter_mm: Option<f64>,
    #[serde(default)]
    pub has_rotating_eye_nut: bool,
}

/// Tongue or swivel switch.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Switch {
    #[serde(default)]
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub catalog: CatalogRef,
    pub switch_type: String,
    pub operation_type: Option<String>,
    pub radius_mm: Option<f64>,
    pub width_mm: Option<f64>,
    pub length_mm: Option<f64>,
    pub angle_degrees: Option<i32>,
    #[serde(default)]
    pub is_automatic: bool,
    #[serde(default)]
    pub is_pneumatic: bool,
    #[serde(default)]
    pub includes_cylinder: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Stopper {
    #[serde(default)]
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub catalog: CatalogRef,
    pub stopper_type: String,
    pub tongue_type: Option<String>,
    pub length_mm: Option<f64>,
    pub height_mm: Option<f64>,
    #[serde(default)]
    pub is_pneumatic: bool,
    #[serde(default)]
    pub is_spring_loaded: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SwivelUnit {
    #[serde(default)]
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub catalog: CatalogRef,
    pub swivel_type: String,
    pub direction: Option<String>,
    pub l1_mm: Option<f64>,
    pub l2_mm: Option<f64>,
    pub l3_mm: Option<f64>,
    #[serde(default)]
    pub is_pneumatic: bool,
    #[serde(default)]
    pub is_spring_loaded: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BridgeInterlock {
    #[serde(default)]
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub catalog: CatalogRef,
    pub part_type: String,
    pub width_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub length_mm: Option<f64>,
    pub min_height_mm: Option<f64>,
    pub max_height_mm: Option<f64>,
}

/// Drop-lift station lowering a track section to floor level.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DropLiftUnit {
    #[serde(default)]
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub catalog: CatalogRef,
    pub lift_type: String,
    pub min_track_length_mm: Option<f64>,
    pub approach_length_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub width_mm: Option<f64>,
    pub safe_working_load_kg: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Accessory {
    #[serde(default)]
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub catalog: CatalogRef,
    pub accessory_type: String,
    pub description: Option<String>,
    pub length_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub width_mm: Option<f64>,
}

/// Special bearing option for a temperature range.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BearingOption {
    #[serde(default)]
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub catalog: CatalogRef,
    pub bearing_type: String,
    pub min_temperature_c: Option<f64>,
    pub max_temperature_c: Option<f64>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TurnTableSwitch {
    #[serde(default)]
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub catalog: CatalogRef,
    pub switch_type: String,
    pub dimension_a_mm: Option<f64>,
    pub dimension_b_mm: Option<f64>,
    pub profile_height_mm: Option<f64>,
    pub operation_type: Option<String>,
    #[serde(default = "default_support_points")]
    pub support_points: i32,
}

fn default_support_points() -> i32 {
    8
}

/// Pneumatic control or air distributor. Not tied to a series or material.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PneumaticControl {
    #[serde(default)]
    pub id: i64,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub catalog: CatalogRef,
    pub control_type: String,
    pub description: Option<String>,
    pub way_count: Option<i32>,
    pub tube_length_m: Option<f64>,
}
