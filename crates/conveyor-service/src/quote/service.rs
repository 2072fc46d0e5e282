//! Quote request intake.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{info, warn};
use validator::Validate;

use conveyor_core::error::AppError;
use conveyor_core::result::AppResult;
use conveyor_core::traits::QuoteArchive;
use conveyor_core::types::QuoteId;
use conveyor_entity::quote::QuoteRequest;

/// Acknowledgement returned for an accepted quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReceipt {
    pub success: bool,
    pub quote_id: QuoteId,
    pub message: String,
}

/// Keeps submitted quotes in memory and mirrors each one to the archive.
pub struct QuoteService {
    quotes: RwLock<Vec<QuoteRequest>>,
    archive: Arc<dyn QuoteArchive>,
}

impl std::fmt::Debug for QuoteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteService").finish_non_exhaustive()
    }
}

impl QuoteService {
    /// Start with an empty quote list.
    pub fn new(archive: Arc<dyn QuoteArchive>) -> Self {
        Self {
            quotes: RwLock::new(Vec::new()),
            archive,
        }
    }

    /// Start with every quote already in the archive, oldest first.
    pub async fn load(archive: Arc<dyn QuoteArchive>) -> AppResult<Self> {
        let mut quotes = Vec::new();
        for document in archive.load_all().await? {
            match serde_json::from_value::<QuoteRequest>(document) {
                Ok(quote) if quote.id.is_some() => quotes.push(quote),
                Ok(_) => warn!("Skipping archived quote without an id"),
                Err(e) => warn!(error = %e, "Skipping malformed archived quote"),
            }
        }
        quotes.sort_by_key(|q| q.submitted_at);
        info!(count = quotes.len(), "Loaded archived quotes");

        Ok(Self {
            quotes: RwLock::new(quotes),
            archive,
        })
    }

    /// Validate, stamp and record a quote request.
    pub async fn submit(&self, mut quote: QuoteRequest) -> AppResult<QuoteReceipt> {
        quote.validate()?;

        let id = QuoteId::new();
        quote.id = Some(id);
        quote.submitted_at = Utc::now();

        let document = serde_json::to_value(&quote)?;
        self.archive.store(id, &document).await.map_err(|e| {
            AppError::internal(format!("Failed to persist quote {id}: {}", e.message))
        })?;

        info!(
            quote_id = %id,
            company = %quote.company,
            email = %quote.email,
            conveyor_type = %quote.conveyor_type,
            quantity = quote.quantity,
            bom_total = quote.bom_total(),
            "Quote request received"
        );
        self.quotes.write().await.push(quote);

        Ok(QuoteReceipt {
            success: true,
            quote_id: id,
            message: "Quote request received".to_string(),
        })
    }

    /// All quotes in submission order.
    pub async fn list(&self) -> Vec<QuoteRequest> {
        self.quotes.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.quotes.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use conveyor_core::error::ErrorKind;

    use super::*;
    use crate::quote::FileQuoteArchive;

    /// Archive that remembers what it was given.
    #[derive(Default)]
    struct MemoryArchive {
        stored: Mutex<Vec<(QuoteId, serde_json::Value)>>,
    }

    #[async_trait]
    impl QuoteArchive for MemoryArchive {
        async fn store(&self, id: QuoteId, document: &serde_json::Value) -> AppResult<()> {
            self.stored
                .lock()
                .map_err(|_| AppError::internal("poisoned"))?
                .push((id, document.clone()));
            Ok(())
        }

        async fn load_all(&self) -> AppResult<Vec<serde_json::Value>> {
            Ok(self
                .stored
                .lock()
                .map_err(|_| AppError::internal("poisoned"))?
                .iter()
                .map(|(_, d)| d.clone())
                .collect())
        }
    }

    fn request(company: &str) -> QuoteRequest {
        serde_json::from_value(serde_json::json!({
            "company": company,
            "contact": "Robin",
            "email": "robin@example.com",
            "conveyorType": "roller",
            "rollerConfiguration": { "length": 2000 }
        }))
        .expect("parse")
    }

    #[tokio::test]
    async fn test_submit_assigns_id_and_archives() {
        let archive = Arc::new(MemoryArchive::default());
        let service = QuoteService::new(archive.clone());

        let mut quote = request("Acme");
        quote.id = Some(QuoteId::new());
        let client_id = quote.id;
        let receipt = service.submit(quote).await.expect("submit");

        assert!(receipt.success);
        assert_eq!(receipt.message, "Quote request received");
        assert_ne!(Some(receipt.quote_id), client_id);

        let quotes = service.list().await;
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].id, Some(receipt.quote_id));

        let stored = archive.stored.lock().expect("lock");
        assert_eq!(stored[0].0, receipt.quote_id);
        assert_eq!(stored[0].1["company"], "Acme");
    }

    #[tokio::test]
    async fn test_invalid_quote_is_not_recorded() {
        let archive = Arc::new(MemoryArchive::default());
        let service = QuoteService::new(archive.clone());

        let mut quote = request("Acme");
        quote.email = "nope".to_string();
        let err = service.submit(quote).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(service.count().await, 0);
        assert!(archive.stored.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn test_quotes_survive_restart() {
        let dir = tempfile::tempdir().expect("tempdir");
        let archive = Arc::new(FileQuoteArchive::new(dir.path()).await.expect("archive"));

        let first = QuoteService::new(archive.clone());
        first.submit(request("First")).await.expect("submit");
        first.submit(request("Second")).await.expect("submit");

        let reloaded = QuoteService::load(archive).await.expect("load");
        let companies: Vec<String> = reloaded.list().await.into_iter().map(|q| q.company).collect();
        assert_eq!(companies, vec!["First", "Second"]);
    }

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_submission_log_names_company_and_email() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let service = QuoteService::new(Arc::new(MemoryArchive::default()));
        service.submit(request("Acme")).await.expect("submit");

        let output = String::from_utf8(logs.0.lock().expect("lock").clone()).expect("utf8");
        assert!(output.contains("Quote request received"));
        assert!(output.contains("company=Acme"));
        assert!(output.contains("email=robin@example.com"));
    }
}
