//! CSV import and export of conveyor configurations.
//!
//! Import is header driven: the header row decides the conveyor family and
//! each column is mapped onto a field by substring match, so loosely named
//! spreadsheets still load. Cells that are missing or do not parse fall back
//! to the field default.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use conveyor_core::error::{AppError, ErrorKind};
use conveyor_entity::configuration::{
    ConveyorConfiguration, ConveyorType, DriveType, OverheadConfig, RollerConfig,
};

/// Name of the single row written by [`export`].
pub const EXPORT_ROW_NAME: &str = "Current";

const OVERHEAD_HEADER: [&str; 11] = [
    "name",
    "trackLength",
    "heightFromFloor",
    "carrierSpacing",
    "loadPerCarrier",
    "numCarriers",
    "includeCurves",
    "curveRadius",
    "inclineAngle",
    "declineAngle",
    "driveUnits",
];

const ROLLER_HEADER: [&str; 8] = [
    "name",
    "length",
    "width",
    "height",
    "rollerDiameter",
    "rollerSpacing",
    "loadCapacity",
    "driveType",
];

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("Failed to read CSV: {0}")]
    Read(#[from] csv::Error),
    #[error("Failed to write CSV: {0}")]
    Write(String),
}

impl From<CsvError> for AppError {
    fn from(err: CsvError) -> Self {
        let kind = match err {
            CsvError::Read(_) => ErrorKind::Validation,
            CsvError::Write(_) => ErrorKind::Internal,
        };
        AppError::with_source(kind, err.to_string(), err)
    }
}

/// One imported row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedConfiguration {
    pub name: String,
    #[serde(flatten)]
    pub configuration: ConveyorConfiguration,
}

/// Result of a CSV import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedConfigurations {
    pub conveyor_type: ConveyorType,
    pub configurations: Vec<NamedConfiguration>,
}

/// Column roles for overhead files, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverheadColumn {
    TrackLength,
    HeightFromFloor,
    CarrierSpacing,
    LoadPerCarrier,
    NumCarriers,
    IncludeCurves,
    CurveRadius,
    Incline,
    Decline,
    DriveUnits,
    Name,
}

impl OverheadColumn {
    fn classify(header: &str) -> Option<Self> {
        let has = |s: &str| header.contains(s);
        let column = if has("tracklength") || header == "length" {
            Self::TrackLength
        } else if has("heightfromfloor") || has("height") {
            Self::HeightFromFloor
        } else if has("carrierspacing") || has("spacing") {
            Self::CarrierSpacing
        } else if has("loadpercarrier") || has("load") {
            Self::LoadPerCarrier
        } else if has("numcarriers") || has("carriers") {
            Self::NumCarriers
        } else if has("includecurves") || has("curves") {
            Self::IncludeCurves
        } else if has("curveradius") {
            Self::CurveRadius
        } else if has("incline") {
            Self::Incline
        } else if has("decline") {
            Self::Decline
        } else if has("driveunits") || has("drive") {
            Self::DriveUnits
        } else if has("name") || has("id") {
            Self::Name
        } else {
            return None;
        };
        Some(column)
    }
}

/// Column roles for roller files, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RollerColumn {
    Length,
    Width,
    Height,
    Diameter,
    Spacing,
    LoadCapacity,
    DriveType,
    Name,
}

impl RollerColumn {
    fn classify(header: &str) -> Option<Self> {
        let has = |s: &str| header.contains(s);
        let column = if has("length") {
            Self::Length
        } else if has("width") {
            Self::Width
        } else if has("height") {
            Self::Height
        } else if has("diameter") {
            Self::Diameter
        } else if has("spacing") {
            Self::Spacing
        } else if has("load") || has("capacity") {
            Self::LoadCapacity
        } else if has("drive") || has("type") {
            Self::DriveType
        } else if has("name") || has("id") {
            Self::Name
        } else {
            return None;
        };
        Some(column)
    }
}

fn is_overhead_header(headers: &[String]) -> bool {
    headers
        .iter()
        .any(|h| h.contains("track") || h.contains("carrier") || h.contains("heightfromfloor"))
}

fn number(cell: Option<&str>, default: f64) -> f64 {
    cell.and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// Integers accept decimal input and truncate it.
fn integer(cell: Option<&str>, default: i32) -> i32 {
    cell.and_then(|v| {
        v.parse::<i32>()
            .ok()
            .or_else(|| v.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i32))
    })
    .unwrap_or(default)
}

fn flag(cell: Option<&str>) -> bool {
    cell.is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

/// Parse CSV text into named configurations of one family.
pub fn import(text: &str) -> Result<ImportedConfigurations, CsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.trim().as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_lowercase).collect();
    let overhead = is_overhead_header(&headers);

    let mut configurations = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let cell = |i: usize| record.get(i).filter(|v| !v.is_empty());
        let mut name = None;

        let configuration = if overhead {
            let mut config = OverheadConfig::default();
            for (i, header) in headers.iter().enumerate() {
                let Some(column) = OverheadColumn::classify(header) else {
                    continue;
                };
                let defaults = OverheadConfig::default();
                match column {
                    OverheadColumn::TrackLength => {
                        config.track_length = number(cell(i), defaults.track_length)
                    }
                    OverheadColumn::HeightFromFloor => {
                        config.height_from_floor = number(cell(i), defaults.height_from_floor)
                    }
                    OverheadColumn::CarrierSpacing => {
                        config.carrier_spacing = number(cell(i), defaults.carrier_spacing)
                    }
                    OverheadColumn::LoadPerCarrier => {
                        config.load_per_carrier = number(cell(i), defaults.load_per_carrier)
                    }
                    OverheadColumn::NumCarriers => {
                        config.num_carriers = integer(cell(i), defaults.num_carriers)
                    }
                    OverheadColumn::IncludeCurves => config.include_curves = flag(cell(i)),
                    OverheadColumn::CurveRadius => {
                        config.curve_radius = number(cell(i), defaults.curve_radius)
                    }
                    OverheadColumn::Incline => {
                        config.incline_angle = number(cell(i), defaults.incline_angle)
                    }
                    OverheadColumn::Decline => {
                        config.decline_angle = number(cell(i), defaults.decline_angle)
                    }
                    OverheadColumn::DriveUnits => {
                        config.drive_units = integer(cell(i), defaults.drive_units)
                    }
                    OverheadColumn::Name => name = cell(i).map(str::to_string),
                }
            }
            ConveyorConfiguration::Overhead(config)
        } else {
            let mut config = RollerConfig::default();
            for (i, header) in headers.iter().enumerate() {
                let Some(column) = RollerColumn::classify(header) else {
                    continue;
                };
                let defaults = RollerConfig::default();
                match column {
                    RollerColumn::Length => config.length = number(cell(i), defaults.length),
                    RollerColumn::Width => config.width = number(cell(i), defaults.width),
                    RollerColumn::Height => config.height = number(cell(i), defaults.height),
                    RollerColumn::Diameter => {
                        config.roller_diameter = number(cell(i), defaults.roller_diameter)
                    }
                    RollerColumn::Spacing => {
                        config.roller_spacing = number(cell(i), defaults.roller_spacing)
                    }
                    RollerColumn::LoadCapacity => {
                        config.load_capacity = integer(cell(i), defaults.load_capacity)
                    }
                    RollerColumn::DriveType => {
                        config.drive_type = cell(i).map(DriveType::parse_lenient).unwrap_or_default()
                    }
                    RollerColumn::Name => name = cell(i).map(str::to_string),
                }
            }
            ConveyorConfiguration::Roller(config)
        };

        configurations.push(NamedConfiguration {
            name: name.unwrap_or_else(|| format!("Config {}", index + 1)),
            configuration,
        });
    }

    let conveyor_type = if overhead {
        ConveyorType::Overhead
    } else {
        ConveyorType::Roller
    };
    debug!(%conveyor_type, rows = configurations.len(), "Imported CSV");
    Ok(ImportedConfigurations {
        conveyor_type,
        configurations,
    })
}

/// Header line plus one row named `Current`.
pub fn export(configuration: &ConveyorConfiguration) -> Result<String, CsvError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    match configuration {
        ConveyorConfiguration::Overhead(c) => {
            writer.write_record(OVERHEAD_HEADER)?;
            writer.write_record([
                EXPORT_ROW_NAME.to_string(),
                c.track_length.to_string(),
                c.height_from_floor.to_string(),
                c.carrier_spacing.to_string(),
                c.load_per_carrier.to_string(),
                c.num_carriers.to_string(),
                c.include_curves.to_string(),
                c.curve_radius.to_string(),
                c.incline_angle.to_string(),
                c.decline_angle.to_string(),
                c.drive_units.to_string(),
            ])?;
        }
        ConveyorConfiguration::Roller(c) => {
            writer.write_record(ROLLER_HEADER)?;
            writer.write_record([
                EXPORT_ROW_NAME.to_string(),
                c.length.to_string(),
                c.width.to_string(),
                c.height.to_string(),
                c.roller_diameter.to_string(),
                c.roller_spacing.to_string(),
                c.load_capacity.to_string(),
                c.drive_type.to_string(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CsvError::Write(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CsvError::Write(e.to_string()))
}

/// Attachment name for an exported CSV.
pub fn file_name(conveyor_type: ConveyorType) -> &'static str {
    match conveyor_type {
        ConveyorType::Roller => "conveyor-config.csv",
        ConveyorType::Overhead => "overhead-conveyor-config.csv",
    }
}
