//! Conveyor configuration records.

pub mod overhead;
pub mod roller;
pub mod tagged;
pub mod types;

pub use overhead::{MAX_CARRIERS, MAX_DRIVE_UNITS, OverheadConfig};
pub use roller::{MAX_ROLLERS, RollerConfig};
pub use tagged::ConveyorConfiguration;
pub use types::{ConveyorType, DriveType};
