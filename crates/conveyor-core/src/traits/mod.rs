//! Core traits defined in `conveyor-core` and implemented by other crates.

pub mod quote_archive;

pub use quote_archive::QuoteArchive;
