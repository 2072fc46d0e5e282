//! A configuration of either conveyor family.

use serde::{Deserialize, Serialize};
use validator::Validate;

use conveyor_core::result::AppResult;

use super::overhead::OverheadConfig;
use super::roller::RollerConfig;
use super::types::ConveyorType;

/// Roller or overhead parameters, tagged on the wire by `conveyorType`
/// alongside the configuration's own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "conveyorType", rename_all = "lowercase")]
pub enum ConveyorConfiguration {
    Roller(RollerConfig),
    Overhead(OverheadConfig),
}

impl ConveyorConfiguration {
    pub fn conveyor_type(&self) -> ConveyorType {
        match self {
            Self::Roller(_) => ConveyorType::Roller,
            Self::Overhead(_) => ConveyorType::Overhead,
        }
    }

    /// Default parameters for a family.
    pub fn default_for(conveyor_type: ConveyorType) -> Self {
        match conveyor_type {
            ConveyorType::Roller => Self::Roller(RollerConfig::default()),
            ConveyorType::Overhead => Self::Overhead(OverheadConfig::default()),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        match self {
            Self::Roller(config) => config.validate()?,
            Self::Overhead(config) => config.validate()?,
        }
        Ok(())
    }
}
