//! SQLite connection pool management.

use std::time::Duration;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::info;

use conveyor_core::config::DatabaseConfig;
use conveyor_core::error::{AppError, ErrorKind};

/// Wrapper around the sqlx SQLite connection pool.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Create a new database pool from configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            url = %config.url,
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to SQLite"
        );

        // Every connection to `:memory:` opens its own database, so an
        // in-memory pool must stay on a single connection.
        let max_connections = if is_in_memory(&config.url) {
            1
        } else {
            config.max_connections
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(config.min_connections.min(max_connections))
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        info!("Successfully connected to SQLite");
        Ok(Self { pool })
    }

    /// Open a fresh in-memory database. Used by tests and the CLI dry runs.
    pub async fn in_memory() -> Result<Self, AppError> {
        Self::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        })
        .await
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Return the underlying sqlx pool (consuming self).
    pub fn into_pool(self) -> SqlitePool {
        self.pool
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
