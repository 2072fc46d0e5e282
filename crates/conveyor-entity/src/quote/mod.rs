//! Quote request models.

pub mod bom;
pub mod model;

pub use bom::BomItem;
pub use model::QuoteRequest;
