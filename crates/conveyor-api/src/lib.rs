//! # conveyor-api
//!
//! HTTP API layer for the conveyor configurator built on Axum.
//!
//! Provides the REST endpoints for geometry, export, CSV, quotes, CAD
//! import and the product catalog, plus middleware, DTOs and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
