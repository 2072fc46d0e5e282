//! Database migration management commands.

use clap::{Args, Subcommand};

use conveyor_core::error::AppError;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            conveyor_database::migration::run_migrations(db.pool()).await?;
            output::print_success("All migrations applied successfully.");
        }
    }

    db.close().await;
    Ok(())
}
