//! Heuristic track classification.
//!
//! Straight track is any line or polyline longer than the configured
//! minimum; curved track is any arc with a radius above the configured
//! minimum. Everything else (circles, splines, annotations) is layout
//! context, not track.

use conveyor_core::config::CadImportConfig;

use crate::models::{EntityInfo, EntityKind, SectionType, TrackSection};

/// Classify one entity, `None` when it is not a track section.
pub fn classify(entity: &EntityInfo, config: &CadImportConfig) -> Option<TrackSection> {
    match entity.kind {
        EntityKind::Line if entity.length > config.straight_min_length_mm => Some(TrackSection {
            section_type: SectionType::Straight,
            length: entity.length,
            radius: None,
            angle: None,
            start_point: entity.start_point,
            end_point: entity.end_point,
            center: None,
            points: None,
        }),
        EntityKind::Arc
            if entity
                .radius
                .is_some_and(|r| r > config.curve_min_radius_mm) =>
        {
            let start = entity.start_angle.unwrap_or(0.0);
            let end = entity.end_angle.unwrap_or(0.0);
            Some(TrackSection {
                section_type: SectionType::Curve,
                length: entity.length,
                radius: entity.radius,
                angle: Some((end - start).abs()),
                start_point: None,
                end_point: None,
                center: entity.center,
                points: None,
            })
        }
        EntityKind::Polyline if entity.length > config.straight_min_length_mm => {
            Some(TrackSection {
                section_type: SectionType::Straight,
                length: entity.length,
                radius: None,
                angle: None,
                start_point: None,
                end_point: None,
                center: None,
                points: entity.points.clone(),
            })
        }
        _ => None,
    }
}
