//! CSV import and export.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use conveyor_core::error::AppError;
use conveyor_entity::configuration::ConveyorConfiguration;
use conveyor_service::csv_io;
use conveyor_service::{ImportedConfigurations, NamedConfiguration};

use super::ConveyorKind;
use crate::output::{self, OutputFormat};

/// Arguments for csv commands
#[derive(Debug, Args)]
pub struct CsvArgs {
    /// CSV subcommand
    #[command(subcommand)]
    pub command: CsvCommand,
}

/// CSV subcommands
#[derive(Debug, Subcommand)]
pub enum CsvCommand {
    /// Read configurations from a CSV file
    Import {
        /// CSV file
        file: PathBuf,
    },
    /// Write a configuration file as a one-row CSV
    Export {
        /// Conveyor family of the input configuration
        #[arg(long = "type", value_enum)]
        kind: ConveyorKind,
        /// Configuration JSON file
        #[arg(long)]
        input: PathBuf,
        /// Destination file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Imported row summary
#[derive(Debug, Serialize, Tabled)]
struct ImportRow {
    name: String,
    #[tabled(rename = "type")]
    conveyor_type: String,
    summary: String,
}

impl From<&NamedConfiguration> for ImportRow {
    fn from(named: &NamedConfiguration) -> Self {
        let summary = match &named.configuration {
            ConveyorConfiguration::Roller(c) => format!(
                "{} x {} mm, {} rollers, {}",
                c.length,
                c.width,
                c.roller_count(),
                c.drive_type
            ),
            ConveyorConfiguration::Overhead(c) => format!(
                "{} mm track, {} carriers, profile {}",
                c.track_length, c.num_carriers, c.track_profile
            ),
        };
        Self {
            name: named.name.clone(),
            conveyor_type: named.configuration.conveyor_type().to_string(),
            summary,
        }
    }
}

/// Execute csv commands
pub fn execute(args: &CsvArgs, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        CsvCommand::Import { file } => {
            let text = std::fs::read_to_string(file).map_err(|e| {
                AppError::validation(format!("Failed to read '{}': {e}", file.display()))
            })?;
            let imported: ImportedConfigurations = csv_io::import(&text)?;
            match format {
                OutputFormat::Json => output::print_json(&imported),
                OutputFormat::Table => {
                    let rows: Vec<ImportRow> =
                        imported.configurations.iter().map(ImportRow::from).collect();
                    output::print_list(&rows, format);
                }
            }
        }
        CsvCommand::Export {
            kind,
            input,
            output: destination,
        } => {
            let configuration = super::read_configuration(*kind, input)?;
            let text = csv_io::export(&configuration)?;
            super::write_output(destination.as_deref(), &text)?;
        }
    }
    Ok(())
}
