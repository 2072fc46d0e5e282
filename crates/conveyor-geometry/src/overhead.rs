//! Overhead enclosed-track conveyor builder.
//!
//! The first straight run starts at the origin and extends along -X. With
//! curves enabled the loop turns through a quarter bend, runs back along +Z
//! and turns again. The finished assembly is shifted so its bounding box
//! is centred on X and Z.

use std::f64::consts::{FRAC_PI_2, PI};

use tracing::debug;
use validator::Validate;

use conveyor_core::result::AppResult;
use conveyor_entity::configuration::OverheadConfig;

use crate::scene::{Part, Primitive, SceneNode, Transform};
use crate::SCALE;

const TRACK_WIDTH: f64 = 0.1;
const TRACK_HEIGHT: f64 = 0.08;
const FLANGE_THICKNESS: f64 = 0.008;
const WEB_THICKNESS: f64 = 0.006;
const CURVE_SEGMENTS: usize = 16;
const DROP_ROD_LENGTH: f64 = 0.35;
/// Offset from the track centreline to the top of the drop rod.
const ROD_TOP_OFFSET: f64 = TRACK_HEIGHT / 2.0 + 0.03;
const TROLLEY_OFFSET: f64 = TRACK_HEIGHT / 2.0 + 0.015;
const WHEEL_OFFSETS: [(f64, f64, f64); 4] = [
    (-0.02, 0.01, 0.02),
    (0.02, 0.01, 0.02),
    (-0.02, 0.01, -0.02),
    (0.02, 0.01, -0.02),
];

/// Number of carriers that fit on the first straight run.
pub fn placed_carriers(config: &OverheadConfig) -> usize {
    let straight = config.straight_run_length();
    if config.carrier_spacing <= 0.0 || straight <= 0.0 {
        return 0;
    }
    let fits = (straight / config.carrier_spacing).floor() as usize;
    fits.min(usize::try_from(config.num_carriers).unwrap_or(0))
}

/// Build the scene for an overhead conveyor.
pub fn build_overhead(config: &OverheadConfig) -> AppResult<SceneNode> {
    config.validate()?;

    let h = config.height_from_floor * SCALE;
    let spacing = config.carrier_spacing * SCALE;
    let radius = config.curve_radius * SCALE;
    let s = config.straight_run_length() * SCALE;
    let incline = config.incline_angle.to_radians();
    let decline = config.decline_angle.to_radians();

    let mut nodes = Vec::new();

    let mut section1 = Transform::at(-s / 2.0, h, 0.0);
    if incline > 0.0 {
        section1.rotation = [0.0, 0.0, incline];
        section1.position[1] = h - s / 2.0 * incline.sin();
    }
    nodes.push(ibeam("section-1", s, section1));

    if config.include_curves {
        nodes.push(quarter_curve(
            "curve-1",
            radius,
            Transform::at(-s, h, 0.0).rotated(0.0, PI, 0.0),
        ));
        let x = if decline > 0.0 { -decline } else { 0.0 };
        nodes.push(ibeam(
            "section-2",
            s,
            Transform::at(-s - radius, h, radius + s / 2.0).rotated(x, FRAC_PI_2, 0.0),
        ));
        nodes.push(quarter_curve(
            "curve-2",
            radius,
            Transform::at(-s - radius, h, radius + s).rotated(0.0, FRAC_PI_2, 0.0),
        ));
    } else if decline > 0.0 {
        let decline_length = s * 0.3;
        nodes.push(ibeam(
            "decline-section",
            decline_length,
            Transform::at(-s - decline_length / 2.0, h, 0.0).rotated(0.0, 0.0, -decline),
        ));
    }

    let carriers = placed_carriers(config);
    for i in 0..carriers {
        let x = -spacing / 2.0 - i as f64 * spacing;
        let y = if incline > 0.0 {
            let from_start = s / 2.0 + x;
            h - s / 2.0 * incline.sin() + from_start * incline.sin()
        } else {
            h
        };
        push_carrier(&mut nodes, i, x, y);
    }

    let drive_units = config.drive_units.max(1);
    for i in 0..drive_units {
        let x = if i == 0 {
            0.0
        } else {
            -s * f64::from(i) / f64::from(drive_units)
        };
        nodes.push(SceneNode::mesh(
            format!("drive-unit-{i}"),
            Primitive::cuboid(0.3, 0.2, 0.2),
            Part::DriveUnit,
            Transform::at(x, h + 0.15, -0.15),
        ));
        nodes.push(SceneNode::mesh(
            format!("drive-motor-{i}"),
            Primitive::cylinder(0.06, 0.15, 16),
            Part::Motor,
            Transform::at(x, h + 0.15, -0.32).rotated(0.0, 0.0, FRAC_PI_2),
        ));
    }

    let column_height = (h - 0.1).max(0.0);
    let column = Primitive::cuboid(0.06, column_height, 0.06);
    for (i, x) in [0.0, -s / 2.0, -s].into_iter().enumerate() {
        for (side, z) in [("a", 0.15), ("b", -0.15)] {
            nodes.push(SceneNode::mesh(
                format!("column-{i}{side}"),
                column,
                Part::Column,
                Transform::at(x, column_height / 2.0, z),
            ));
        }
        nodes.push(SceneNode::mesh(
            format!("column-brace-{i}"),
            Primitive::cuboid(0.04, 0.04, 0.34),
            Part::Brace,
            Transform::at(x, 0.3, 0.0),
        ));
    }

    let mut scene = SceneNode::group("overhead-conveyor", Transform::default(), nodes);
    if let Some(bbox) = scene.bounding_box() {
        let [cx, _, cz] = bbox.center();
        scene.transform.position = [-cx, 0.0, -cz];
    }

    debug!(
        straight_run_m = s,
        carriers,
        curves = config.include_curves,
        drive_units,
        meshes = scene.mesh_count(),
        "Built overhead conveyor scene"
    );

    Ok(scene)
}

/// I-beam track section of the given length, centred on its origin.
fn ibeam(name: impl Into<String>, length: f64, transform: Transform) -> SceneNode {
    let flange = Primitive::cuboid(length, FLANGE_THICKNESS, TRACK_WIDTH);
    let flange_y = TRACK_HEIGHT / 2.0 - FLANGE_THICKNESS / 2.0;
    SceneNode::group(
        name,
        transform,
        vec![
            SceneNode::mesh("top-flange", flange, Part::Track, Transform::at(0.0, flange_y, 0.0)),
            SceneNode::mesh(
                "bottom-flange",
                flange,
                Part::Track,
                Transform::at(0.0, -flange_y, 0.0),
            ),
            SceneNode::mesh(
                "web",
                Primitive::cuboid(length, TRACK_HEIGHT - FLANGE_THICKNESS * 2.0, WEB_THICKNESS),
                Part::Track,
                Transform::default(),
            ),
        ],
    )
}

/// 90° bend approximated by short straight I-beam segments along the arc.
fn quarter_curve(name: &str, radius: f64, transform: Transform) -> SceneNode {
    let step = FRAC_PI_2 / CURVE_SEGMENTS as f64;
    let segments = (0..CURVE_SEGMENTS)
        .map(|i| {
            let mid = i as f64 * step + step / 2.0;
            ibeam(
                format!("{name}-segment-{i}"),
                radius * step,
                Transform::at(radius * mid.sin(), 0.0, radius * (1.0 - mid.cos()))
                    .rotated(0.0, -mid, 0.0),
            )
        })
        .collect();
    SceneNode::group(name, transform, segments)
}

fn push_carrier(nodes: &mut Vec<SceneNode>, i: usize, x: f64, y: f64) {
    let trolley_y = y - TROLLEY_OFFSET;
    nodes.push(SceneNode::mesh(
        format!("trolley-{i}"),
        Primitive::cuboid(0.06, 0.03, 0.05),
        Part::Trolley,
        Transform::at(x, trolley_y, 0.0),
    ));

    let wheel = Primitive::cylinder(0.012, 0.015, 12);
    for (w, (wx, wy, wz)) in WHEEL_OFFSETS.into_iter().enumerate() {
        nodes.push(SceneNode::mesh(
            format!("trolley-{i}-wheel-{w}"),
            wheel,
            Part::Wheel,
            Transform::at(x + wx, trolley_y + wy, wz).rotated(FRAC_PI_2, 0.0, 0.0),
        ));
    }

    nodes.push(SceneNode::mesh(
        format!("drop-rod-{i}"),
        Primitive::cylinder(0.01, DROP_ROD_LENGTH, 8),
        Part::DropRod,
        Transform::at(x, y - ROD_TOP_OFFSET - DROP_ROD_LENGTH / 2.0, 0.0),
    ));

    nodes.push(SceneNode::group(
        format!("carrier-{i}"),
        Transform::at(x, y - ROD_TOP_OFFSET - DROP_ROD_LENGTH, 0.0),
        vec![
            SceneNode::mesh(
                "hook-shank",
                Primitive::cuboid(0.02, 0.15, 0.02),
                Part::Carrier,
                Transform::at(0.0, -0.075, 0.0),
            ),
            SceneNode::mesh(
                "hook-arm",
                Primitive::cuboid(0.06, 0.02, 0.02),
                Part::Carrier,
                Transform::at(0.03, -0.16, 0.0),
            ),
            SceneNode::mesh(
                "hook-tip",
                Primitive::cuboid(0.02, 0.04, 0.02),
                Part::Carrier,
                Transform::at(0.06, -0.14, 0.0),
            ),
        ],
    ));
}

#[cfg(test)]
mod tests {
    use conveyor_core::error::ErrorKind;

    use super::*;
    use crate::scene::NodeContent;

    fn beam_length(node: &SceneNode) -> f64 {
        match node.children()[0].content {
            NodeContent::Mesh {
                primitive: Primitive::Box { width, .. },
                ..
            } => width,
            _ => panic!("expected flange box"),
        }
    }

    #[test]
    fn test_default_overhead_scene() {
        let scene = build_overhead(&OverheadConfig::default()).expect("build");
        assert_eq!(scene.count_parts(Part::Trolley), 10);
        assert_eq!(scene.count_parts(Part::Wheel), 40);
        assert_eq!(scene.count_parts(Part::DropRod), 10);
        assert_eq!(scene.count_parts(Part::Carrier), 30);
        assert_eq!(scene.count_parts(Part::DriveUnit), 1);
        assert_eq!(scene.count_parts(Part::Column), 6);
        assert_eq!(scene.count_parts(Part::Track), 3);
        assert!(scene.find("curve-1").is_none());
    }

    #[test]
    fn test_carriers_limited_by_straight_run() {
        let config = OverheadConfig {
            track_length: 4500.0,
            num_carriers: 10,
            ..Default::default()
        };
        assert_eq!(placed_carriers(&config), 4);
        let scene = build_overhead(&config).expect("build");
        assert_eq!(scene.count_parts(Part::Trolley), 4);
    }

    #[test]
    fn test_curved_loop_has_two_equal_runs_and_sixteen_segment_bends() {
        let config = OverheadConfig {
            include_curves: true,
            ..Default::default()
        };
        let scene = build_overhead(&config).expect("build");
        let expected = (10000.0 - PI * 500.0) / 2.0 * SCALE;

        let first = scene.find("section-1").expect("section 1");
        let second = scene.find("section-2").expect("section 2");
        assert!((beam_length(first) - expected).abs() < 1e-9);
        assert!((beam_length(second) - expected).abs() < 1e-9);

        assert_eq!(scene.find("curve-1").expect("curve").children().len(), 16);
        assert_eq!(scene.find("curve-2").expect("curve").children().len(), 16);
        // Two straight runs plus 32 bend segments, three meshes each.
        assert_eq!(scene.count_parts(Part::Track), (2 + 32) * 3);
    }

    #[test]
    fn test_scene_is_centred_on_x_and_z() {
        for include_curves in [false, true] {
            let config = OverheadConfig {
                include_curves,
                incline_angle: 5.0,
                drive_units: 3,
                ..Default::default()
            };
            let scene = build_overhead(&config).expect("build");
            let [cx, _, cz] = scene.bounding_box().expect("bbox").center();
            assert!(cx.abs() < 1e-9, "x centre {cx}");
            assert!(cz.abs() < 1e-9, "z centre {cz}");
        }
    }

    #[test]
    fn test_decline_without_curves_adds_section() {
        let config = OverheadConfig {
            decline_angle: 10.0,
            ..Default::default()
        };
        let scene = build_overhead(&config).expect("build");
        let decline = scene.find("decline-section").expect("decline section");
        assert!((beam_length(decline) - 3.0).abs() < 1e-9);
        assert!((decline.transform.rotation[2] + 10f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn test_drive_units_spread_along_first_run() {
        let config = OverheadConfig {
            drive_units: 2,
            ..Default::default()
        };
        let scene = build_overhead(&config).expect("build");
        let first = scene.find("drive-unit-0").expect("drive 0");
        let second = scene.find("drive-unit-1").expect("drive 1");
        assert_eq!(first.transform.position[0], 0.0);
        assert!((second.transform.position[0] + 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_curves_that_do_not_fit_are_rejected() {
        let config = OverheadConfig {
            track_length: 1000.0,
            include_curves: true,
            ..Default::default()
        };
        let err = build_overhead(&config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
