//! Part family enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use conveyor_core::AppError;

/// The fourteen part families of an overhead conveyor catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartFamily {
    TrackProfiles,
    Bends,
    Brackets,
    Trolleys,
    Flightbars,
    Switches,
    Stoppers,
    SwivelUnits,
    BridgeInterlocks,
    DropLifts,
    Accessories,
    Bearings,
    Turntables,
    Pneumatics,
}

impl PartFamily {
    /// Every family, in catalogue order.
    pub const ALL: [PartFamily; 14] = [
        Self::TrackProfiles,
        Self::Bends,
        Self::Brackets,
        Self::Trolleys,
        Self::Flightbars,
        Self::Switches,
        Self::Stoppers,
        Self::SwivelUnits,
        Self::BridgeInterlocks,
        Self::DropLifts,
        Self::Accessories,
        Self::Bearings,
        Self::Turntables,
        Self::Pneumatics,
    ];

    /// URL slug of the family.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::TrackProfiles => "track-profiles",
            Self::Bends => "bends",
            Self::Brackets => "brackets",
            Self::Trolleys => "trolleys",
            Self::Flightbars => "flightbars",
            Self::Switches => "switches",
            Self::Stoppers => "stoppers",
            Self::SwivelUnits => "swivel-units",
            Self::BridgeInterlocks => "bridge-interlocks",
            Self::DropLifts => "drop-lifts",
            Self::Accessories => "accessories",
            Self::Bearings => "bearings",
            Self::Turntables => "turntables",
            Self::Pneumatics => "pneumatics",
        }
    }
}

impl fmt::Display for PartFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for PartFamily {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|family| family.slug() == wanted)
            .ok_or_else(|| AppError::not_found(format!("Unknown part family: '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_round_trip() {
        for family in PartFamily::ALL {
            assert_eq!(family.slug().parse::<PartFamily>().ok(), Some(family));
        }
    }

    #[test]
    fn test_serde_matches_slug() {
        let json = serde_json::to_string(&PartFamily::SwivelUnits).expect("serialize");
        assert_eq!(json, "\"swivel-units\"");
    }
}
