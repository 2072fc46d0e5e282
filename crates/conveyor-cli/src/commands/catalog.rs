//! Catalog listing commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use conveyor_core::error::AppError;
use conveyor_database::seeder::NIKO_CLIENT_CODE;
use conveyor_entity::catalog::{Client, PartFamily};
use conveyor_service::{CatalogService, SeriesView};

use crate::output::{self, OutputFormat};

/// Arguments for catalog commands
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Catalog subcommand
    #[command(subcommand)]
    pub command: CatalogCommand,
}

/// Catalog subcommands
#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List active clients
    Clients,
    /// List profile series of a client
    Series {
        /// Client code
        #[arg(long, default_value = NIKO_CLIENT_CODE)]
        client: String,
    },
    /// List parts of one family
    Parts {
        /// Client code
        #[arg(long, default_value = NIKO_CLIENT_CODE)]
        client: String,
        /// Family slug (e.g. trolleys, bends, track-profiles)
        #[arg(long, default_value = "trolleys")]
        family: String,
        /// Restrict to a series code
        #[arg(long)]
        series: Option<String>,
    },
}

/// Client display row
#[derive(Debug, Serialize, Tabled)]
struct ClientRow {
    code: String,
    name: String,
    country: String,
    catalogue: String,
}

impl From<Client> for ClientRow {
    fn from(client: Client) -> Self {
        Self {
            code: client.code,
            name: client.name,
            country: output::opt(client.country),
            catalogue: output::opt(client.catalogue_reference),
        }
    }
}

/// Series display row
#[derive(Debug, Serialize, Tabled)]
struct SeriesRow {
    series: String,
    #[tabled(rename = "height (mm)")]
    height: f64,
    #[tabled(rename = "width (mm)")]
    width: f64,
    #[tabled(rename = "max load (kg)")]
    max_load: String,
    material: String,
}

impl From<SeriesView> for SeriesRow {
    fn from(view: SeriesView) -> Self {
        Self {
            series: view.series.series_code,
            height: view.series.height_mm,
            width: view.series.width_mm,
            max_load: output::opt(view.series.max_load_kg),
            material: output::opt(view.material.map(|m| m.name)),
        }
    }
}

/// Part display row, common to every family
#[derive(Debug, Serialize, Tabled)]
struct PartRow {
    #[tabled(rename = "part number")]
    part_number: String,
    series: String,
    material: String,
    price: String,
}

impl PartRow {
    fn from_json(part: &Value) -> Self {
        let text = |v: &Value| v.as_str().map(str::to_string);
        Self {
            part_number: text(&part["partNumber"]).unwrap_or_default(),
            series: output::opt(text(&part["series"]["seriesCode"])),
            material: output::opt(text(&part["material"]["name"])),
            price: output::opt(part["price"].as_f64().map(|p| format!("{p:.2}"))),
        }
    }
}

/// Execute catalog commands
pub async fn execute(
    args: &CatalogArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;
    let catalog = CatalogService::new(db.pool().clone());

    match &args.command {
        CatalogCommand::Clients => {
            let rows: Vec<ClientRow> = catalog
                .list_clients()
                .await?
                .into_iter()
                .map(ClientRow::from)
                .collect();
            output::print_list(&rows, format);
        }
        CatalogCommand::Series { client } => {
            let rows: Vec<SeriesRow> = catalog
                .series(client)
                .await?
                .into_iter()
                .map(SeriesRow::from)
                .collect();
            output::print_list(&rows, format);
        }
        CatalogCommand::Parts {
            client,
            family,
            series,
        } => {
            let family: PartFamily = family.parse()?;
            let parts = catalog
                .parts_by_family(client, family, series.as_deref())
                .await?;
            match format {
                OutputFormat::Json => output::print_json(&parts),
                OutputFormat::Table => {
                    let rows: Vec<PartRow> = parts
                        .as_array()
                        .map(|items| items.iter().map(PartRow::from_json).collect())
                        .unwrap_or_default();
                    output::print_list(&rows, format);
                }
            }
        }
    }

    db.close().await;
    Ok(())
}
