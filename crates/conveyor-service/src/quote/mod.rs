//! Quote intake and persistence.

pub mod archive;
pub mod service;

pub use archive::FileQuoteArchive;
pub use service::{QuoteReceipt, QuoteService};
