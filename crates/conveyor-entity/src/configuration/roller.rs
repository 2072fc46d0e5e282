//! Roller conveyor configuration.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::types::DriveType;

/// Most rollers a single bed may carry.
pub const MAX_ROLLERS: usize = 10_000;

/// Parameters of a roller bed conveyor. Lengths are millimetres, load is kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
#[validate(schema(function = "validate_roller_count"))]
pub struct RollerConfig {
    /// Overall bed length.
    #[validate(range(exclusive_min = 0.0, message = "length must be positive"))]
    pub length: f64,
    /// Bed width between the side rails.
    #[validate(range(exclusive_min = 0.0, message = "width must be positive"))]
    pub width: f64,
    /// Height of the roller surface above the floor.
    #[validate(range(exclusive_min = 0.0, message = "height must be positive"))]
    pub height: f64,
    /// Roller diameter.
    #[validate(range(exclusive_min = 0.0, message = "roller diameter must be positive"))]
    pub roller_diameter: f64,
    /// Centre-to-centre roller pitch.
    #[validate(range(exclusive_min = 0.0, message = "roller spacing must be positive"))]
    pub roller_spacing: f64,
    /// Rated load.
    #[validate(range(min = 0, message = "load capacity cannot be negative"))]
    pub load_capacity: i32,
    /// Powered or gravity bed.
    pub drive_type: DriveType,
}

impl RollerConfig {
    /// Number of rollers that fit along the bed: `floor(length / spacing)`.
    pub fn roller_count(&self) -> usize {
        if self.roller_spacing <= 0.0 || self.length <= 0.0 {
            return 0;
        }
        (self.length / self.roller_spacing).floor() as usize
    }
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            length: 2000.0,
            width: 600.0,
            height: 750.0,
            roller_diameter: 50.0,
            roller_spacing: 100.0,
            load_capacity: 300,
            drive_type: DriveType::Powered,
        }
    }
}

fn validate_roller_count(config: &RollerConfig) -> Result<(), ValidationError> {
    if config.roller_count() > MAX_ROLLERS {
        let mut err = ValidationError::new("roller_count");
        err.message = Some(format!("length / roller spacing must not exceed {MAX_ROLLERS} rollers").into());
        return Err(err);
    }
    Ok(())
}
