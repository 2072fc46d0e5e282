//! Catalogue seeding.

use clap::Args;

use conveyor_core::error::AppError;
use conveyor_database::seeder::{NIKO_CLIENT_CODE, SeedOutcome, seed_niko_catalogue};

use crate::output;

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Skip confirmation prompt
    #[arg(long)]
    pub force: bool,
}

/// Migrate, then load the NIKO catalogue unless it is already present
pub async fn execute(args: &SeedArgs, config_path: &str) -> Result<(), AppError> {
    if !args.force {
        let confirm = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Seed the {NIKO_CLIENT_CODE} catalogue into the configured database?"
            ))
            .default(true)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;
    conveyor_database::migration::run_migrations(db.pool()).await?;

    match seed_niko_catalogue(db.pool()).await? {
        SeedOutcome::Seeded { parts } => {
            output::print_success(&format!("Seeded {NIKO_CLIENT_CODE} catalogue ({parts} parts)."))
        }
        SeedOutcome::AlreadyPresent => {
            output::print_warning(&format!("{NIKO_CLIENT_CODE} catalogue already present."))
        }
    }

    db.close().await;
    Ok(())
}
