//! # conveyor-geometry
//!
//! Turns conveyor configuration records into scene graphs of positioned
//! boxes and cylinders. Builders take millimetre inputs and emit metre
//! coordinates ([`SCALE`]), Y up, rotations as XYZ Euler angles.

pub mod overhead;
pub mod roller;
pub mod scene;
pub mod specs;

pub use overhead::build_overhead;
pub use roller::build_roller;
pub use scene::{Aabb, Part, PlacedPrimitive, Primitive, SceneNode, Transform};
pub use specs::{OverheadSpecifications, RollerSpecifications};

/// Millimetres to scene units.
pub const SCALE: f64 = 0.001;
