//! Repository implementations for the product catalog.

pub mod category;
pub mod client;
pub mod material;
pub mod part;
pub mod series;

pub use category::CategoryRepository;
pub use client::ClientRepository;
pub use material::MaterialRepository;
pub use part::{CatalogPart, PartRepository};
pub use series::SeriesRepository;

use conveyor_core::error::{AppError, ErrorKind};

/// Map an insert failure, turning unique-constraint violations into conflicts.
pub(crate) fn insert_error(err: sqlx::Error, what: &str) -> AppError {
    let unique = err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());
    if unique {
        AppError::with_source(ErrorKind::Conflict, format!("Duplicate {what}"), err)
    } else {
        AppError::with_source(ErrorKind::Database, format!("Failed to create {what}"), err)
    }
}
