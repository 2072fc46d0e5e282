//! # conveyor-entity
//!
//! Domain models for the conveyor configurator. Configuration records are
//! plain validated values; catalog structs map one-to-one onto SQLite rows
//! and derive `sqlx::FromRow`. All wire representations use camelCase.

pub mod catalog;
pub mod configuration;
pub mod quote;
