//! # conveyor-service
//!
//! Business logic shared by the HTTP API and the CLI: catalog lookups,
//! quote intake, STEP/JSON export and CSV import/export.

pub mod catalog;
pub mod csv_io;
pub mod export;
pub mod quote;

pub use catalog::{CatalogService, PartView, SeriesView};
pub use csv_io::{CsvError, ImportedConfigurations, NamedConfiguration};
pub use export::{ExportService, StepFile};
pub use quote::{FileQuoteArchive, QuoteReceipt, QuoteService};
