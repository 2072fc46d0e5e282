//! One JSON file per quote under a local directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use conveyor_core::error::{AppError, ErrorKind};
use conveyor_core::result::AppResult;
use conveyor_core::traits::QuoteArchive;
use conveyor_core::types::QuoteId;

const FILE_PREFIX: &str = "quote_";
const FILE_SUFFIX: &str = ".json";

/// Quote archive writing `quote_{id}.json` files.
#[derive(Debug, Clone)]
pub struct FileQuoteArchive {
    root: PathBuf,
}

impl FileQuoteArchive {
    /// Create the archive, creating its directory if needed.
    pub async fn new(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create quotes directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: QuoteId) -> PathBuf {
        self.root.join(format!("{FILE_PREFIX}{id}{FILE_SUFFIX}"))
    }
}

fn is_quote_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(FILE_PREFIX) && n.ends_with(FILE_SUFFIX))
}

#[async_trait]
impl QuoteArchive for FileQuoteArchive {
    async fn store(&self, id: QuoteId, document: &serde_json::Value) -> AppResult<()> {
        let path = self.path_for(id);
        let body = serde_json::to_vec_pretty(document)?;
        fs::write(&path, &body).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write quote file: {}", path.display()),
                e,
            )
        })?;
        debug!(quote_id = %id, path = %path.display(), "Wrote quote file");
        Ok(())
    }

    async fn load_all(&self) -> AppResult<Vec<serde_json::Value>> {
        let mut entries = fs::read_dir(&self.root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read quotes directory: {}", self.root.display()),
                e,
            )
        })?;

        let mut documents = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !is_quote_file(&path) {
                continue;
            }
            let parsed = match fs::read(&path).await {
                Ok(bytes) => serde_json::from_slice::<serde_json::Value>(&bytes)
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            match parsed {
                Ok(document) => documents.push(document),
                Err(error) => warn!(path = %path.display(), error, "Skipping unreadable quote file"),
            }
        }
        Ok(documents)
    }
}
