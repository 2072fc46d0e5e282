//! Plain-text configuration summaries for quotes and the CLI.

use conveyor_entity::configuration::{ConveyorConfiguration, OverheadConfig, RollerConfig};

pub fn describe(configuration: &ConveyorConfiguration) -> String {
    match configuration {
        ConveyorConfiguration::Roller(config) => roller(config),
        ConveyorConfiguration::Overhead(config) => overhead(config),
    }
}

pub fn roller(c: &RollerConfig) -> String {
    [
        "Roller Conveyor Configuration:".to_string(),
        format!("- Length: {} mm", c.length),
        format!("- Width: {} mm", c.width),
        format!("- Height: {} mm", c.height),
        format!("- Roller Diameter: {} mm", c.roller_diameter),
        format!("- Roller Spacing: {} mm", c.roller_spacing),
        format!("- Load Capacity: {} kg", c.load_capacity),
        format!("- Drive Type: {}", c.drive_type),
        format!("- Rollers: {}", c.roller_count()),
    ]
    .join("\n")
}

pub fn overhead(c: &OverheadConfig) -> String {
    [
        "Overhead Conveyor Configuration:".to_string(),
        format!("- Track Length: {} mm", c.track_length),
        format!("- Height from Floor: {} mm", c.height_from_floor),
        format!("- Track Profile: {}", c.track_profile),
        format!("- Carrier Spacing: {} mm", c.carrier_spacing),
        format!("- Number of Carriers: {}", c.num_carriers),
        format!("- Load per Carrier: {} kg", c.load_per_carrier),
        format!("- Include Curves: {}", c.include_curves),
        format!("- Curve Radius: {} mm", c.curve_radius),
        format!("- Incline Angle: {}°", c.incline_angle),
        format!("- Decline Angle: {}°", c.decline_angle),
        format!("- Drive Units: {}", c.drive_units),
        format!("- Total Load Capacity: {} kg", c.total_load_capacity()),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roller_summary_lists_roller_count() {
        let text = roller(&RollerConfig::default());
        assert!(text.starts_with("Roller Conveyor Configuration:\n- Length: 2000 mm\n"));
        assert!(text.ends_with("- Drive Type: powered\n- Rollers: 20"));
    }

    #[test]
    fn test_overhead_summary_lists_total_load() {
        let config = OverheadConfig {
            incline_angle: 12.5,
            ..Default::default()
        };
        let text = overhead(&config);
        assert_eq!(text.lines().count(), 13);
        assert!(text.contains("- Track Profile: 24.000\n"));
        assert!(text.contains("- Incline Angle: 12.5°\n"));
        assert!(text.ends_with("- Total Load Capacity: 500 kg"));
    }
}
