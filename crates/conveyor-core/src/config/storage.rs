//! Runtime data directory configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Filesystem locations for runtime data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all runtime data.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Directory holding one `quote_{id}.json` file per submitted quote.
    #[serde(default = "default_quotes_dir")]
    pub quotes_dir: String,
}

impl StorageConfig {
    /// The quotes directory as a path.
    pub fn quotes_path(&self) -> PathBuf {
        PathBuf::from(&self.quotes_dir)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            quotes_dir: default_quotes_dir(),
        }
    }
}

fn default_data_root() -> String {
    "./data".to_string()
}

fn default_quotes_dir() -> String {
    "./data/quotes".to_string()
}
