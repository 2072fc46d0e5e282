//! Convenience result alias.

use crate::error::AppError;

/// Result type used across all conveyor crates.
pub type AppResult<T> = Result<T, AppError>;
