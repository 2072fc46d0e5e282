//! Durable storage for submitted quote documents.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::QuoteId;

/// Persists quote documents outside the process.
///
/// The quote service keeps the authoritative list in memory and mirrors
/// every accepted quote through this trait. Documents are opaque JSON so
/// the archive does not depend on the entity crate.
#[async_trait]
pub trait QuoteArchive: Send + Sync + 'static {
    /// Store one quote document under its id.
    async fn store(&self, id: QuoteId, document: &serde_json::Value) -> AppResult<()>;

    /// Load every stored document. Unreadable entries are skipped.
    async fn load_all(&self) -> AppResult<Vec<serde_json::Value>>;
}
