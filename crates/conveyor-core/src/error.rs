//! Unified application error types for the conveyor configurator.
//!
//! All crates map their internal errors into [`AppError`] so that the `?`
//! operator works across crate boundaries.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// Input validation failed.
    Validation,
    /// A conflict occurred (duplicate part number, series code, etc.).
    Conflict,
    /// An internal server error occurred.
    Internal,
    /// A database error occurred.
    Database,
    /// A filesystem I/O error occurred.
    Storage,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// The CAD import plugin failed.
    Plugin,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Database => write!(f, "DATABASE"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Plugin => write!(f, "PLUGIN"),
        }
    }
}

/// The unified application error.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    /// Create a plugin error.
    pub fn plugin(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Plugin, message)
    }

    /// Whether this error was caused by bad caller input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::NotFound | ErrorKind::Validation | ErrorKind::Conflict
        )
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::with_source(
            ErrorKind::Validation,
            format!("Invalid input: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_code() {
        let err = AppError::not_found("Client not found");
        assert_eq!(err.to_string(), "NOT_FOUND: Client not found");
    }

    #[test]
    fn test_clone_drops_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AppError::from(io);
        assert!(std::error::Error::source(&err).is_some());

        let cloned = err.clone();
        assert_eq!(cloned.kind, ErrorKind::Storage);
        assert!(cloned.source.is_none());
    }

    #[test]
    fn test_client_error_kinds() {
        assert!(AppError::validation("bad").is_client_error());
        assert!(AppError::conflict("dup").is_client_error());
        assert!(!AppError::database("down").is_client_error());
    }
}
