//! # conveyor-core
//!
//! Core crate for the conveyor configurator. Contains configuration schemas,
//! typed identifiers, the quote archive trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other conveyor crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
