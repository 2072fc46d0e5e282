//! Conveyor family and drive type enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use conveyor_core::AppError;

/// The two conveyor families the configurator supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConveyorType {
    /// Roller bed conveyor.
    #[default]
    Roller,
    /// Enclosed track overhead conveyor.
    Overhead,
}

impl ConveyorType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Roller => "roller",
            Self::Overhead => "overhead",
        }
    }
}

impl fmt::Display for ConveyorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConveyorType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "roller" => Ok(Self::Roller),
            "overhead" => Ok(Self::Overhead),
            _ => Err(AppError::validation(format!(
                "Invalid conveyor type: '{s}'. Expected one of: roller, overhead"
            ))),
        }
    }
}

/// How a roller conveyor moves its load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriveType {
    /// Motor-driven rollers.
    #[default]
    Powered,
    /// Free-spinning rollers moved by gravity or hand.
    Gravity,
}

impl DriveType {
    /// Return the drive type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Powered => "powered",
            Self::Gravity => "gravity",
        }
    }

    /// Parse free-form input, falling back to [`DriveType::Powered`].
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Whether a motor is fitted.
    pub fn is_powered(&self) -> bool {
        matches!(self, Self::Powered)
    }
}

impl fmt::Display for DriveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DriveType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "powered" => Ok(Self::Powered),
            "gravity" => Ok(Self::Gravity),
            _ => Err(AppError::validation(format!(
                "Invalid drive type: '{s}'. Expected one of: powered, gravity"
            ))),
        }
    }
}
