//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a serde default so an empty file
//! (or no file at all) still yields a runnable configuration.

pub mod app;
pub mod cad;
pub mod database;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::cad::CadImportConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides (`CONVEYOR__SERVER__PORT=9000`).
pub const ENV_PREFIX: &str = "CONVEYOR";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Catalog database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Runtime data directories.
    #[serde(default)]
    pub storage: StorageConfig,
    /// CAD import heuristics and mesh dimensions.
    #[serde(default)]
    pub cad_import: CadImportConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for a named environment.
    ///
    /// Merges `config/default.toml`, the optional `config/{env}.toml`
    /// overlay, and environment variables prefixed with `CONVEYOR__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Load configuration from a single TOML file plus environment overrides.
    pub fn load_from_file(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_uses_defaults() {
        let config: AppConfig = config::Config::builder()
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("defaults should deserialize");

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.max_connections, 5);
        assert!(config.database.seed_on_startup);
        assert_eq!(config.cad_import.arc_segments, 16);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_toml_overrides_are_applied() {
        let toml = r#"
            [server]
            port = 9090

            [cad_import]
            straight_min_length_mm = 250.0
        "#;
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("overrides should deserialize");

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.cad_import.straight_min_length_mm, 250.0);
        assert_eq!(config.cad_import.curve_min_radius_mm, 200.0);
    }
}
