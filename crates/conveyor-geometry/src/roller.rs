//! Roller bed conveyor builder.

use std::f64::consts::FRAC_PI_2;

use tracing::debug;
use validator::Validate;

use conveyor_core::result::AppResult;
use conveyor_entity::configuration::RollerConfig;

use crate::scene::{Part, Primitive, SceneNode, Transform};
use crate::SCALE;

const FRAME_THICKNESS: f64 = 0.04;
const FRAME_HEIGHT: f64 = 0.06;
const LEG_SECTION: f64 = 0.04;
const LEG_INSET: f64 = 0.1;
const BRACE_HEIGHT: f64 = 0.15;
/// Beds longer than this get a middle leg pair.
const MIDDLE_LEG_THRESHOLD: f64 = 1.5;

/// Build the scene for a roller conveyor.
///
/// The bed runs along X centred on the origin, rollers span Z, and the
/// roller surface sits at `height`.
pub fn build_roller(config: &RollerConfig) -> AppResult<SceneNode> {
    config.validate()?;

    let length = config.length * SCALE;
    let width = config.width * SCALE;
    let height = config.height * SCALE;
    let radius = config.roller_diameter * SCALE / 2.0;
    let spacing = config.roller_spacing * SCALE;

    let mut nodes = Vec::new();

    let side = Primitive::cuboid(length, FRAME_HEIGHT, FRAME_THICKNESS);
    let side_z = width / 2.0 + FRAME_THICKNESS / 2.0;
    nodes.push(SceneNode::mesh("left-frame", side, Part::Frame, Transform::at(0.0, height, side_z)));
    nodes.push(SceneNode::mesh("right-frame", side, Part::Frame, Transform::at(0.0, height, -side_z)));

    let end = Primitive::cuboid(FRAME_THICKNESS, FRAME_HEIGHT, width + FRAME_THICKNESS * 2.0);
    let end_x = length / 2.0 + FRAME_THICKNESS / 2.0;
    nodes.push(SceneNode::mesh("front-frame", end, Part::Frame, Transform::at(end_x, height, 0.0)));
    nodes.push(SceneNode::mesh("back-frame", end, Part::Frame, Transform::at(-end_x, height, 0.0)));

    let roller = Primitive::cylinder(radius, width, 24);
    let roller_count = config.roller_count();
    let start_x = -length / 2.0 + spacing / 2.0;
    for i in 0..roller_count {
        nodes.push(SceneNode::mesh(
            format!("roller-{i}"),
            roller,
            Part::Roller,
            Transform::at(start_x + i as f64 * spacing, height - radius - 0.005, 0.0)
                .rotated(FRAC_PI_2, 0.0, 0.0),
        ));
    }

    let leg_x = length / 2.0 - LEG_INSET;
    let mut legs = vec![
        (leg_x, width / 2.0),
        (leg_x, -width / 2.0),
        (-leg_x, width / 2.0),
        (-leg_x, -width / 2.0),
    ];
    if length > MIDDLE_LEG_THRESHOLD {
        legs.push((0.0, width / 2.0));
        legs.push((0.0, -width / 2.0));
    }

    let leg_height = (height - 0.02).max(0.0);
    let leg = Primitive::cuboid(LEG_SECTION, leg_height, LEG_SECTION);
    for (i, &(x, z)) in legs.iter().enumerate() {
        nodes.push(SceneNode::mesh(
            format!("leg-{i}"),
            leg,
            Part::Leg,
            Transform::at(x, leg_height / 2.0, z),
        ));
    }

    // One brace per leg pair, at the pair's x.
    let brace = Primitive::cuboid(0.02, 0.02, width);
    for (i, &(x, _)) in legs.iter().step_by(2).enumerate() {
        nodes.push(SceneNode::mesh(
            format!("brace-{i}"),
            brace,
            Part::Brace,
            Transform::at(x, BRACE_HEIGHT, 0.0),
        ));
    }

    if config.drive_type.is_powered() {
        nodes.push(SceneNode::mesh(
            "motor",
            Primitive::cylinder(0.08, 0.15, 16),
            Part::Motor,
            Transform::at(leg_x, height - 0.15, -width / 2.0 - 0.15).rotated(FRAC_PI_2, 0.0, 0.0),
        ));
        nodes.push(SceneNode::mesh(
            "motor-mount",
            Primitive::cuboid(0.1, 0.08, 0.04),
            Part::Frame,
            Transform::at(leg_x, height - 0.1, -width / 2.0 - 0.05),
        ));
    }

    let scene = SceneNode::group("roller-conveyor", Transform::default(), nodes);
    debug!(
        rollers = roller_count,
        legs = legs.len(),
        powered = config.drive_type.is_powered(),
        meshes = scene.mesh_count(),
        "Built roller conveyor scene"
    );

    Ok(scene)
}
