//! Conveyor Configurator Server
//!
//! Main entry point that wires the catalog, quote, export and CAD import
//! crates together and starts the HTTP server.

use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use conveyor_core::config::AppConfig;
use conveyor_core::error::AppError;
use conveyor_database::DatabasePool;
use conveyor_database::seeder::{SeedOutcome, seed_niko_catalogue};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration for the environment named by `CONVEYOR_ENV`.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("CONVEYOR_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Conveyor Configurator v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Create data directories ──────────────────────────
    create_data_directories(&config).await?;

    // ── Step 2: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;
    conveyor_database::migration::run_migrations(db.pool()).await?;

    // ── Step 3: Seed the catalogue ───────────────────────────────
    if config.database.seed_on_startup {
        match seed_niko_catalogue(db.pool()).await? {
            SeedOutcome::Seeded { parts } => tracing::info!(parts, "Seeded NIKO catalogue"),
            SeedOutcome::AlreadyPresent => tracing::info!("NIKO catalogue already present"),
        }
    }

    // ── Step 4: Services and application state ───────────────────
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let addr = config.server.bind_address();
    let state = conveyor_api::AppState::build(config, db.clone()).await?;
    let app = conveyor_api::build_app(state);

    // ── Step 5: Bind and serve ───────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    tracing::info!("Conveyor Configurator listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 6: Release the pool ─────────────────────────────────
    if tokio::time::timeout(grace, db.close()).await.is_err() {
        tracing::warn!("Database pool did not close within {:?}", grace);
    }

    tracing::info!("Conveyor Configurator shut down gracefully");
    Ok(())
}

/// Create required data directories
async fn create_data_directories(config: &AppConfig) -> Result<(), AppError> {
    let dirs = [
        std::path::PathBuf::from(&config.storage.data_root),
        config.storage.quotes_path(),
    ];

    for dir in &dirs {
        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            AppError::internal(format!("Failed to create dir '{}': {e}", dir.display()))
        })?;
    }

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
