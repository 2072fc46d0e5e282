//! Offline STEP and JSON export of a configuration file.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use conveyor_core::error::AppError;
use conveyor_entity::configuration::ConveyorConfiguration;
use conveyor_service::ExportService;

use super::ConveyorKind;

/// Arguments for export commands
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Export subcommand
    #[command(subcommand)]
    pub command: ExportCommand,
}

/// Options shared by every export format
#[derive(Debug, Args)]
pub struct ExportSource {
    /// Conveyor family of the input configuration
    #[arg(long = "type", value_enum)]
    pub kind: ConveyorKind,
    /// Configuration JSON file
    #[arg(long)]
    pub input: PathBuf,
    /// Destination file (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Export subcommands
#[derive(Debug, Subcommand)]
pub enum ExportCommand {
    /// ISO 10303-21 text export
    Step(ExportSource),
    /// Configuration dump with derived specifications
    Json(ExportSource),
}

/// Execute export commands
pub fn execute(args: &ExportArgs) -> Result<(), AppError> {
    let exporter = ExportService::new();

    match &args.command {
        ExportCommand::Step(source) => {
            let step = match super::read_configuration(source.kind, &source.input)? {
                ConveyorConfiguration::Roller(config) => exporter.roller_step(&config),
                ConveyorConfiguration::Overhead(config) => exporter.overhead_step(&config),
            };
            super::write_output(source.output.as_deref(), &step.content)
        }
        ExportCommand::Json(source) => {
            let configuration = super::read_configuration(source.kind, &source.input)?;
            let dump = exporter.json_dump(&configuration)?;
            super::write_output(source.output.as_deref(), &dump)
        }
    }
}
