//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use tracing::info;

use conveyor_core::config::AppConfig;
use conveyor_core::result::AppResult;
use conveyor_core::traits::QuoteArchive;
use conveyor_database::DatabasePool;
use conveyor_service::{CatalogService, ExportService, FileQuoteArchive, QuoteService};
use plugin_cad_import::CadImporter;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or `Copy` for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite catalog database
    pub db: DatabasePool,

    // ── Services ─────────────────────────────────────────────
    pub catalog: Arc<CatalogService>,
    /// In-memory quote list backed by the quotes directory
    pub quotes: Arc<QuoteService>,
    pub exporter: ExportService,
    pub cad_importer: Arc<CadImporter>,
}

impl AppState {
    /// Wire services over an already migrated database.
    ///
    /// Quotes previously written to the configured directory are loaded
    /// back into memory.
    pub async fn build(config: AppConfig, db: DatabasePool) -> AppResult<Self> {
        let archive = FileQuoteArchive::new(config.storage.quotes_path()).await?;
        let archive: Arc<dyn QuoteArchive> = Arc::new(archive);
        let quotes = QuoteService::load(archive).await?;
        info!(quotes = quotes.count().await, "Quote store ready");

        Ok(Self {
            catalog: Arc::new(CatalogService::new(db.pool().clone())),
            quotes: Arc::new(quotes),
            exporter: ExportService::new(),
            cad_importer: Arc::new(CadImporter::new(config.cad_import.clone())),
            config: Arc::new(config),
            db,
        })
    }
}
