//! Overhead (enclosed track) conveyor configuration.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Most carriers one loop may carry.
pub const MAX_CARRIERS: i32 = 10_000;
/// Most drive units one loop may carry.
pub const MAX_DRIVE_UNITS: i32 = 100;

/// Parameters of an overhead conveyor loop. Lengths are millimetres,
/// angles are degrees, loads are kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
#[validate(schema(function = "validate_curve_fit"))]
pub struct OverheadConfig {
    /// Total track length including bends.
    #[validate(range(exclusive_min = 0.0, message = "track length must be positive"))]
    pub track_length: f64,
    /// Track height above the floor.
    #[validate(range(exclusive_min = 0.0, message = "height from floor must be positive"))]
    pub height_from_floor: f64,
    /// Catalogue series code of the track profile.
    pub track_profile: String,
    /// Distance between carriers.
    #[validate(range(exclusive_min = 0.0, message = "carrier spacing must be positive"))]
    pub carrier_spacing: f64,
    /// Load hung on each carrier.
    #[validate(range(min = 0.0, message = "load per carrier cannot be negative"))]
    pub load_per_carrier: f64,
    /// Requested number of carriers.
    #[validate(range(min = 0, max = MAX_CARRIERS, message = "number of carriers must be in [0, 10000]"))]
    pub num_carriers: i32,
    /// Whether the loop turns through two 90° bends.
    pub include_curves: bool,
    /// Bend radius.
    #[validate(range(exclusive_min = 0.0, message = "curve radius must be positive"))]
    pub curve_radius: f64,
    /// Incline of the first straight run.
    #[validate(range(min = 0.0, exclusive_max = 90.0, message = "incline must be in [0, 90)"))]
    pub incline_angle: f64,
    /// Decline of the return run.
    #[validate(range(min = 0.0, exclusive_max = 90.0, message = "decline must be in [0, 90)"))]
    pub decline_angle: f64,
    /// Number of drive units along the track.
    #[validate(range(min = 1, max = MAX_DRIVE_UNITS, message = "drive units must be in [1, 100]"))]
    pub drive_units: i32,
}

impl OverheadConfig {
    /// Length of each straight run.
    ///
    /// With curves the track is two straight runs joined by two quarter
    /// bends, so each run is `(track_length - π·R) / 2`.
    pub fn straight_run_length(&self) -> f64 {
        if self.include_curves {
            (self.track_length - PI * self.curve_radius) / 2.0
        } else {
            self.track_length
        }
    }

    /// Combined load of all configured carriers.
    pub fn total_load_capacity(&self) -> f64 {
        f64::from(self.num_carriers) * self.load_per_carrier
    }
}

impl Default for OverheadConfig {
    fn default() -> Self {
        Self {
            track_length: 10000.0,
            height_from_floor: 3000.0,
            track_profile: "24.000".to_string(),
            carrier_spacing: 1000.0,
            load_per_carrier: 50.0,
            num_carriers: 10,
            include_curves: false,
            curve_radius: 500.0,
            incline_angle: 0.0,
            decline_angle: 0.0,
            drive_units: 1,
        }
    }
}

fn validate_curve_fit(config: &OverheadConfig) -> Result<(), ValidationError> {
    if config.include_curves && config.track_length <= PI * config.curve_radius {
        let mut err = ValidationError::new("curve_fit");
        err.message = Some("track length must exceed π × curve radius when curves are included".into());
        return Err(err);
    }
    Ok(())
}
