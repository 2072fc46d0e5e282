//! CAD drawing inspection.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use conveyor_core::error::AppError;
use plugin_cad_import::{CadImporter, SectionType, TrackSection};

use crate::output::{self, OutputFormat};

/// Arguments for cad commands
#[derive(Debug, Args)]
pub struct CadArgs {
    /// CAD subcommand
    #[command(subcommand)]
    pub command: CadCommand,
}

/// CAD subcommands
#[derive(Debug, Subcommand)]
pub enum CadCommand {
    /// Classify the track in a drawing and suggest a configuration
    Inspect {
        /// DXF file
        file: PathBuf,
    },
}

/// Track section display row
#[derive(Debug, Serialize, Tabled)]
struct SectionRow {
    #[tabled(rename = "type")]
    section_type: String,
    #[tabled(rename = "length (mm)")]
    length: String,
    #[tabled(rename = "radius (mm)")]
    radius: String,
}

impl From<&TrackSection> for SectionRow {
    fn from(section: &TrackSection) -> Self {
        let section_type = match section.section_type {
            SectionType::Straight => "straight",
            SectionType::Curve => "curve",
        };
        Self {
            section_type: section_type.to_string(),
            length: format!("{:.1}", section.length),
            radius: output::opt(section.radius.map(|r| format!("{r:.1}"))),
        }
    }
}

/// Execute cad commands
pub async fn execute(args: &CadArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let importer = CadImporter::new(config.cad_import);

    match &args.command {
        CadCommand::Inspect { file } => {
            let bytes = tokio::fs::read(file).await.map_err(|e| {
                AppError::validation(format!("Failed to read '{}': {e}", file.display()))
            })?;
            let file_name = file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();

            let result = tokio::task::spawn_blocking(move || importer.try_import(&file_name, &bytes))
                .await
                .map_err(|e| AppError::internal(format!("Import task failed: {e}")))?
                .map_err(|e| AppError::validation(e.to_string()))?;

            if format == OutputFormat::Json {
                output::print_json(&result);
                return Ok(());
            }

            let rows: Vec<SectionRow> = result.track_sections.iter().map(SectionRow::from).collect();
            output::print_list(&rows, format);
            println!();
            output::print_kv("Entities", &result.entities.len().to_string());
            output::print_kv("Straight track (mm)", &format!("{:.1}", result.total_track_length));
            output::print_kv("Curved track (mm)", &format!("{:.1}", result.total_curve_length));
            output::print_kv("Curves", &result.curve_count.to_string());
            if let Some(suggested) = &result.suggested_config {
                println!("\nSuggested configuration:");
                output::print_kv("Track length (mm)", &format!("{:.1}", suggested.track_length));
                output::print_kv("Height from floor (mm)", &format!("{:.1}", suggested.height_from_floor));
                output::print_kv("Profile", &suggested.suggested_profile);
                output::print_kv("Include curves", &suggested.include_curves.to_string());
                output::print_kv("Curve radius (mm)", &format!("{:.1}", suggested.curve_radius));
                output::print_kv("Carriers", &suggested.num_carriers.to_string());
                output::print_kv("Carrier spacing (mm)", &format!("{:.1}", suggested.carrier_spacing));
            }
        }
    }
    Ok(())
}
