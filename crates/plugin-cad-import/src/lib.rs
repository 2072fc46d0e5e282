//! # Plugin CAD Import
//!
//! Reads DXF drawings of overhead conveyor layouts. Lines, polylines and
//! large-radius arcs are classified as track sections; the importer sums
//! their lengths, builds a flat triangle mesh for preview and proposes an
//! overhead conveyor configuration.
//!
//! DWG files are recognised but rejected: there is no DWG reader in the
//! Rust ecosystem, so drawings must be saved as DXF first.

pub mod classifier;
pub mod error;
pub mod importer;
pub mod mesh;
pub mod models;
pub mod parser;

pub use error::CadImportError;
pub use importer::{CadFormat, CadImporter};
pub use models::{
    BoundingBox, CadImportResult, EntityInfo, EntityKind, MeshData, Point3D, SectionType,
    SuggestedConfig, TrackSection,
};
