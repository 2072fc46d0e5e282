//! JSON dump of a configuration.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

use conveyor_core::result::AppResult;
use conveyor_entity::configuration::ConveyorConfiguration;
use conveyor_geometry::{OverheadSpecifications, RollerSpecifications};

/// Estimates for either family as JSON.
pub fn specifications(configuration: &ConveyorConfiguration) -> AppResult<Value> {
    let value = match configuration {
        ConveyorConfiguration::Roller(config) => {
            serde_json::to_value(RollerSpecifications::from_config(config))?
        }
        ConveyorConfiguration::Overhead(config) => {
            serde_json::to_value(OverheadSpecifications::from_config(config))?
        }
    };
    Ok(value)
}

/// Pretty-printed `{type, exportedAt, configuration, specifications}`.
pub fn dump(configuration: &ConveyorConfiguration, at: DateTime<Utc>) -> AppResult<String> {
    let config = match configuration {
        ConveyorConfiguration::Roller(config) => serde_json::to_value(config)?,
        ConveyorConfiguration::Overhead(config) => serde_json::to_value(config)?,
    };
    let document = json!({
        "type": configuration.conveyor_type(),
        "exportedAt": at.to_rfc3339_opts(SecondsFormat::Millis, true),
        "configuration": config,
        "specifications": specifications(configuration)?,
    });
    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use conveyor_entity::configuration::{OverheadConfig, RollerConfig};

    use super::*;

    #[test]
    fn test_roller_dump() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single().expect("time");
        let text = dump(&ConveyorConfiguration::Roller(RollerConfig::default()), at).expect("dump");
        assert!(text.contains("\n  \"type\": \"roller\""));

        let value: Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["exportedAt"], "2024-01-02T03:04:05.000Z");
        assert_eq!(value["configuration"]["rollerSpacing"], 100.0);
        assert!(value["configuration"].get("conveyorType").is_none());
        assert_eq!(value["specifications"]["rollerCount"], 20);
    }

    #[test]
    fn test_overhead_specifications() {
        let config = ConveyorConfiguration::Overhead(OverheadConfig::default());
        let specs = specifications(&config).expect("specs");
        assert_eq!(specs["numCarriers"], 10);
        assert_eq!(specs["trackLengthM"], "10.0");
        assert_eq!(specs["totalLoadKg"], 500.0);
    }
}
