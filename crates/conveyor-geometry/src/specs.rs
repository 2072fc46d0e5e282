//! Rough specification estimates shown next to a built conveyor.

use serde::{Deserialize, Serialize};

use conveyor_entity::configuration::{DriveType, OverheadConfig, RollerConfig};

use crate::overhead::placed_carriers;

/// Estimated figures for a roller conveyor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollerSpecifications {
    pub roller_count: usize,
    pub estimated_weight_kg: i64,
    pub frame_material: String,
    pub roller_material: String,
    pub drive_type: DriveType,
}

impl RollerSpecifications {
    pub fn from_config(config: &RollerConfig) -> Self {
        let roller_count = config.roller_count();
        // Two rails at ~8 kg/m, 0.8 kg per roller, two leg frames at 6 kg, 15 kg motor.
        let frame = config.length / 1000.0 * 8.0 * 2.0;
        let rollers = roller_count as f64 * 0.8;
        let legs = 12.0;
        let motor = if config.drive_type.is_powered() { 15.0 } else { 0.0 };
        let (frame_material, roller_material) = materials_for_load(config.load_capacity);

        Self {
            roller_count,
            estimated_weight_kg: (frame + rollers + legs + motor).round() as i64,
            frame_material: frame_material.to_string(),
            roller_material: roller_material.to_string(),
            drive_type: config.drive_type,
        }
    }
}

/// Frame and roller material for a rated load.
pub fn materials_for_load(load_capacity: i32) -> (&'static str, &'static str) {
    match load_capacity {
        l if l >= 500 => ("Heavy Steel", "Steel"),
        l if l >= 300 => ("Steel", "Galvanized"),
        _ => ("Light Steel", "Aluminum"),
    }
}

/// Estimated figures for an overhead conveyor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverheadSpecifications {
    pub num_carriers: i32,
    /// Carriers that fit on the first straight run of the model.
    pub placed_carriers: usize,
    /// Track length in metres, one decimal.
    pub track_length_m: String,
    pub straight_run_length_mm: f64,
    pub estimated_weight_kg: i64,
    pub total_load_kg: f64,
}

impl OverheadSpecifications {
    pub fn from_config(config: &OverheadConfig) -> Self {
        let track_m = config.track_length / 1000.0;
        let track = track_m * 15.0;
        let carriers = f64::from(config.num_carriers) * 8.0;
        let drives = f64::from(config.drive_units) * 25.0;
        // One support every 3 m at ~20 kg.
        let supports = (config.track_length / 3000.0).ceil() * 20.0;

        Self {
            num_carriers: config.num_carriers,
            placed_carriers: placed_carriers(config),
            track_length_m: format!("{track_m:.1}"),
            straight_run_length_mm: config.straight_run_length(),
            estimated_weight_kg: (track + carriers + drives + supports).round() as i64,
            total_load_kg: config.total_load_capacity(),
        }
    }
}
