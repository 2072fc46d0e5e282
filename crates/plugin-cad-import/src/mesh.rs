//! Preview mesh generation.
//!
//! Lines become rectangular boxes of the configured track width and height;
//! arcs and circles become tessellated ring sections. Everything lands in
//! one flat vertex/index buffer.

use std::f64::consts::TAU;

use conveyor_core::config::CadImportConfig;

use crate::models::{EntityInfo, EntityKind, MeshData, Point3D};

/// Lines shorter than this produce no geometry.
const MIN_SEGMENT_LENGTH: f64 = 0.001;

/// Box faces as triangles over the 8 box vertices.
const BOX_INDICES: [u32; 36] = [
    0, 1, 3, 0, 3, 2, // start cap
    4, 6, 7, 4, 7, 5, // end cap
    2, 3, 7, 2, 7, 6, // top
    0, 4, 5, 0, 5, 1, // bottom
    0, 2, 6, 0, 6, 4, // left
    1, 5, 7, 1, 7, 3, // right
];

/// Outer, inner, top and bottom faces of one ring segment.
const RING_SEGMENT_INDICES: [u32; 24] = [
    0, 2, 3, 0, 3, 1, //
    4, 5, 7, 4, 7, 6, //
    1, 3, 7, 1, 7, 5, //
    0, 4, 6, 0, 6, 2, //
];

/// Accumulates geometry for a whole drawing.
#[derive(Debug)]
pub struct MeshBuilder {
    half_width: f64,
    half_height: f64,
    segments: u32,
    mesh: MeshData,
}

impl MeshBuilder {
    pub fn new(config: &CadImportConfig) -> Self {
        Self {
            half_width: config.track_width_mm / 2.0,
            half_height: config.track_height_mm / 2.0,
            segments: config.arc_segments.max(1),
            mesh: MeshData::default(),
        }
    }

    /// Add the geometry for one extracted entity, if it has any.
    pub fn add_entity(&mut self, entity: &EntityInfo) {
        match entity.kind {
            EntityKind::Line => {
                if let (Some(start), Some(end)) = (entity.start_point, entity.end_point) {
                    self.add_line(start, end);
                }
            }
            EntityKind::Arc => {
                if let (Some(center), Some(radius), Some(start), Some(end)) = (
                    entity.center,
                    entity.radius,
                    entity.start_angle,
                    entity.end_angle,
                ) {
                    self.add_arc(center, radius, start.to_radians(), end.to_radians());
                }
            }
            EntityKind::Circle => {
                if let (Some(center), Some(radius)) = (entity.center, entity.radius) {
                    self.add_arc(center, radius, 0.0, TAU);
                }
            }
            EntityKind::Polyline => {
                let Some(points) = entity.points.as_deref() else {
                    return;
                };
                for pair in points.windows(2) {
                    self.add_line(pair[0], pair[1]);
                }
                if entity.is_closed && points.len() > 1 {
                    self.add_line(points[points.len() - 1], points[0]);
                }
            }
            _ => {}
        }
    }

    /// Box along the line: `width` across it in the XY plane, `height` in Z.
    pub fn add_line(&mut self, start: Point3D, end: Point3D) {
        let (dx, dy, dz) = (end.x - start.x, end.y - start.y, end.z - start.z);
        let length = (dx * dx + dy * dy + dz * dz).sqrt();
        if length < MIN_SEGMENT_LENGTH {
            return;
        }

        let (ux, uy) = (dx / length, dy / length);
        let (mut px, mut py) = (-uy, ux);
        let perp_len = (px * px + py * py).sqrt();
        if perp_len > MIN_SEGMENT_LENGTH {
            px = px / perp_len * self.half_width;
            py = py / perp_len * self.half_width;
        }

        let base = self.next_index();
        let hh = self.half_height;
        for p in [start, end] {
            self.push_vertex(p.x - px, p.y - py, p.z - hh);
            self.push_vertex(p.x + px, p.y + py, p.z - hh);
            self.push_vertex(p.x - px, p.y - py, p.z + hh);
            self.push_vertex(p.x + px, p.y + py, p.z + hh);
        }
        self.mesh.indices.extend(BOX_INDICES.iter().map(|i| base + i));
    }

    /// Ring section between `radius ± width/2`, angles in radians.
    ///
    /// An end angle below the start wraps forward by a full turn.
    pub fn add_arc(&mut self, center: Point3D, radius: f64, start: f64, end: f64) {
        let end = if end < start { end + TAU } else { end };
        let step = (end - start) / f64::from(self.segments);
        let outer_r = radius + self.half_width;
        let inner_r = radius - self.half_width;
        let (bottom, top) = (center.z - self.half_height, center.z + self.half_height);

        let ring = |angle: f64| {
            let (sin, cos) = angle.sin_cos();
            (
                (center.x + outer_r * cos, center.y + outer_r * sin),
                (center.x + inner_r * cos, center.y + inner_r * sin),
            )
        };

        let (mut prev_outer, mut prev_inner) = ring(start);
        for i in 1..=self.segments {
            let (outer, inner) = ring(start + f64::from(i) * step);
            let base = self.next_index();
            for (x, y) in [prev_outer, outer] {
                self.push_vertex(x, y, bottom);
                self.push_vertex(x, y, top);
            }
            for (x, y) in [prev_inner, inner] {
                self.push_vertex(x, y, bottom);
                self.push_vertex(x, y, top);
            }
            self.mesh
                .indices
                .extend(RING_SEGMENT_INDICES.iter().map(|i| base + i));
            prev_outer = outer;
            prev_inner = inner;
        }
    }

    pub fn finish(self) -> MeshData {
        self.mesh
    }

    fn next_index(&self) -> u32 {
        u32::try_from(self.mesh.vertex_count()).unwrap_or(u32::MAX)
    }

    fn push_vertex(&mut self, x: f64, y: f64, z: f64) {
        self.mesh
            .vertices
            .extend([x as f32, y as f32, z as f32]);
    }
}
