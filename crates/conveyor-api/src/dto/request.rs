//! Request DTOs.

use serde::Deserialize;

use conveyor_entity::configuration::{
    ConveyorConfiguration, ConveyorType, OverheadConfig, RollerConfig,
};

/// `?series=` filter for part listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeriesQuery {
    pub series: Option<String>,
}

/// `?series=&angle=` filter for bends.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BendQuery {
    pub series: Option<String>,
    pub angle: Option<i32>,
}

/// `?q=&category=` product search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

/// Body of `POST /api/export/json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonExportRequest {
    #[serde(default)]
    pub conveyor_type: ConveyorType,
    #[serde(default)]
    pub roller_configuration: Option<RollerConfig>,
    #[serde(default)]
    pub overhead_configuration: Option<OverheadConfig>,
}

impl JsonExportRequest {
    /// The configuration matching `conveyor_type`, or that family's defaults.
    pub fn into_configuration(self) -> ConveyorConfiguration {
        match self.conveyor_type {
            ConveyorType::Roller => {
                ConveyorConfiguration::Roller(self.roller_configuration.unwrap_or_default())
            }
            ConveyorType::Overhead => {
                ConveyorConfiguration::Overhead(self.overhead_configuration.unwrap_or_default())
            }
        }
    }
}
