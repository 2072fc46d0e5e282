//! Product catalog rows.
//!
//! Every table is scoped by `client_id`. Part families share a common
//! [`CatalogRef`] block flattened into both the row and the JSON shape.

pub mod client;
pub mod family;
pub mod parts;

pub use client::{Category, Client, Material, ProfileSeries};
pub use family::PartFamily;
pub use parts::{
    Accessory, BearingOption, Bracket, BridgeInterlock, CatalogRef, DropLiftUnit, FlightBar,
    PneumaticControl, Stopper, Switch, SwivelUnit, TrackBend, TrackProfile, Trolley,
    TurnTableSwitch,
};
