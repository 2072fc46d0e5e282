//! STEP text, JSON dump and plain-text summaries of a configuration.

pub mod json;
pub mod step;
pub mod summary;

use chrono::{DateTime, Utc};

use conveyor_core::result::AppResult;
use conveyor_entity::configuration::{
    ConveyorConfiguration, ConveyorType, OverheadConfig, RollerConfig,
};

pub use step::StepFile;

/// Stateless export entry points stamped with the current time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    pub fn roller_step(&self, config: &RollerConfig) -> StepFile {
        step::roller_step(config, Utc::now())
    }

    pub fn overhead_step(&self, config: &OverheadConfig) -> StepFile {
        step::overhead_step(config, Utc::now())
    }

    /// Pretty JSON dump of one configuration with its estimates.
    pub fn json_dump(&self, configuration: &ConveyorConfiguration) -> AppResult<String> {
        json::dump(configuration, Utc::now())
    }

    pub fn summary(&self, configuration: &ConveyorConfiguration) -> String {
        summary::describe(configuration)
    }

    /// Attachment name for a JSON dump.
    pub fn json_file_name(conveyor_type: ConveyorType) -> &'static str {
        match conveyor_type {
            ConveyorType::Roller => "conveyor-config.json",
            ConveyorType::Overhead => "overhead-conveyor-config.json",
        }
    }
}

/// Timestamp format used in STEP headers.
pub(crate) fn step_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S").to_string()
}
