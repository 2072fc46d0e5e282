//! CAD import heuristics.
//!
//! Classification thresholds and mesh dimensions are in drawing units
//! (millimetres for the drawings this importer is meant for).

use serde::{Deserialize, Serialize};

/// Settings for the DXF track importer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CadImportConfig {
    /// Lines and polylines longer than this are straight track sections.
    #[serde(default = "default_straight_min_length")]
    pub straight_min_length_mm: f64,
    /// Arcs with a radius above this are curved track sections.
    #[serde(default = "default_curve_min_radius")]
    pub curve_min_radius_mm: f64,
    /// Width of the generated track mesh.
    #[serde(default = "default_track_width")]
    pub track_width_mm: f64,
    /// Height of the generated track mesh.
    #[serde(default = "default_track_height")]
    pub track_height_mm: f64,
    /// Segments used to tessellate arcs and circles.
    #[serde(default = "default_arc_segments")]
    pub arc_segments: u32,
    /// Suggested mounting height when the drawing is flat.
    #[serde(default = "default_height_from_floor")]
    pub default_height_from_floor_mm: f64,
    /// Suggested curve radius when the drawing has no curves.
    #[serde(default = "default_curve_radius")]
    pub default_curve_radius_mm: f64,
    /// Suggested carrier spacing.
    #[serde(default = "default_carrier_spacing")]
    pub default_carrier_spacing_mm: f64,
    /// Suggested track profile series code.
    #[serde(default = "default_profile")]
    pub suggested_profile: String,
    /// Largest drawing accepted for import.
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: usize,
}

impl Default for CadImportConfig {
    fn default() -> Self {
        Self {
            straight_min_length_mm: default_straight_min_length(),
            curve_min_radius_mm: default_curve_min_radius(),
            track_width_mm: default_track_width(),
            track_height_mm: default_track_height(),
            arc_segments: default_arc_segments(),
            default_height_from_floor_mm: default_height_from_floor(),
            default_curve_radius_mm: default_curve_radius(),
            default_carrier_spacing_mm: default_carrier_spacing(),
            suggested_profile: default_profile(),
            max_file_bytes: default_max_file_bytes(),
        }
    }
}

fn default_straight_min_length() -> f64 {
    100.0
}

fn default_curve_min_radius() -> f64 {
    200.0
}

fn default_track_width() -> f64 {
    50.0
}

fn default_track_height() -> f64 {
    30.0
}

fn default_arc_segments() -> u32 {
    16
}

fn default_height_from_floor() -> f64 {
    3000.0
}

fn default_curve_radius() -> f64 {
    500.0
}

fn default_carrier_spacing() -> f64 {
    1000.0
}

fn default_profile() -> String {
    "24.000".to_string()
}

fn default_max_file_bytes() -> usize {
    50 * 1024 * 1024
}
