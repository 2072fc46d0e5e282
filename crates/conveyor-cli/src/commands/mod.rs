//! CLI command definitions and dispatch.

pub mod cad;
pub mod catalog;
pub mod csv;
pub mod export;
pub mod migrate;
pub mod seed;

use std::path::Path;

use clap::{Parser, Subcommand, ValueEnum};

use conveyor_core::config::AppConfig;
use conveyor_core::error::AppError;
use conveyor_database::DatabasePool;
use conveyor_entity::configuration::{
    ConveyorConfiguration, ConveyorType, OverheadConfig, RollerConfig,
};

use crate::output::{self, OutputFormat};

/// Conveyor configurator administration and offline exports
#[derive(Debug, Parser)]
#[command(name = "conveyor-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Load the NIKO catalogue
    Seed(seed::SeedArgs),
    /// Catalog listings
    Catalog(catalog::CatalogArgs),
    /// STEP and JSON export of a configuration file
    Export(export::ExportArgs),
    /// CSV import and export
    Csv(csv::CsvArgs),
    /// CAD drawing inspection
    Cad(cad::CadArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Seed(args) => seed::execute(args, &self.config).await,
            Commands::Catalog(args) => catalog::execute(args, &self.config, self.format).await,
            Commands::Export(args) => export::execute(args),
            Commands::Csv(args) => csv::execute(args, self.format),
            Commands::Cad(args) => cad::execute(args, &self.config, self.format).await,
        }
    }
}

/// Conveyor family selector for `--type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConveyorKind {
    Roller,
    Overhead,
}

impl From<ConveyorKind> for ConveyorType {
    fn from(kind: ConveyorKind) -> Self {
        match kind {
            ConveyorKind::Roller => Self::Roller,
            ConveyorKind::Overhead => Self::Overhead,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    tracing::debug!(path = config_path, "Loading configuration");
    AppConfig::load_from_file(config_path)
        .map_err(|e| AppError::configuration(format!("Failed to load config: {e}")))
}

/// Helper: connect to the configured catalog database
pub async fn connect(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}

/// Helper: read a plain configuration object of the given family from a JSON file
pub fn read_configuration(
    kind: ConveyorKind,
    path: &Path,
) -> Result<ConveyorConfiguration, AppError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        AppError::validation(format!("Failed to read '{}': {e}", path.display()))
    })?;
    parse_configuration(kind, &text)
}

/// Parse and validate a configuration object of the given family.
pub fn parse_configuration(kind: ConveyorKind, text: &str) -> Result<ConveyorConfiguration, AppError> {
    let configuration = match kind {
        ConveyorKind::Roller => {
            ConveyorConfiguration::Roller(serde_json::from_str::<RollerConfig>(text)?)
        }
        ConveyorKind::Overhead => {
            ConveyorConfiguration::Overhead(serde_json::from_str::<OverheadConfig>(text)?)
        }
    };
    configuration.validate()?;
    Ok(configuration)
}

/// Helper: write generated content to a file, or stdout when no path is given
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), AppError> {
    match path {
        Some(path) => {
            std::fs::write(path, content)?;
            output::print_success(&format!("Wrote {}", path.display()));
        }
        None if content.ends_with('\n') => print!("{content}"),
        None => println!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use conveyor_core::error::ErrorKind;

    use super::*;

    #[test]
    fn test_parse_configuration_fills_defaults() {
        let configuration =
            parse_configuration(ConveyorKind::Overhead, r#"{"trackLength": 12000}"#)
                .expect("parse");
        match configuration {
            ConveyorConfiguration::Overhead(config) => {
                assert_eq!(config.track_length, 12000.0);
                assert_eq!(config.track_profile, "24.000");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_configuration_validates() {
        let err = parse_configuration(ConveyorKind::Roller, r#"{"rollerSpacing": 0}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_cli_parses_export_command() {
        let cli = Cli::try_parse_from([
            "conveyor-cli",
            "export",
            "step",
            "--type",
            "overhead",
            "--input",
            "overhead.json",
        ])
        .expect("parse");
        assert!(matches!(cli.command, Commands::Export(_)));
        assert_eq!(cli.config, "config/default.toml");
    }
}
