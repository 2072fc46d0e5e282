//! DXF reading and entity extraction.

use std::f64::consts::PI;
use std::io::Cursor;

use dxf::Drawing;
use dxf::entities::EntityType;
use tracing::trace;

use crate::error::CadImportError;
use crate::models::{EntityInfo, EntityKind, Point3D};

/// Parse an ASCII or binary DXF document.
pub fn load_drawing(bytes: &[u8]) -> Result<Drawing, CadImportError> {
    let mut reader = Cursor::new(bytes);
    Ok(Drawing::load(&mut reader)?)
}

/// Model-space entities in drawing order.
pub fn extract_entities(drawing: &Drawing) -> Vec<EntityInfo> {
    drawing
        .entities()
        .map(|entity| {
            let layer = if entity.common.layer.is_empty() {
                "0"
            } else {
                entity.common.layer.as_str()
            };
            describe(&entity.specific, layer)
        })
        .collect()
}

fn describe(specific: &EntityType, layer: &str) -> EntityInfo {
    match specific {
        EntityType::Line(line) => {
            let start = Point3D::from(&line.p1);
            let end = Point3D::from(&line.p2);
            let mut info = EntityInfo::new(EntityKind::Line, layer);
            info.length = start.distance(&end);
            info.start_point = Some(start);
            info.end_point = Some(end);
            info
        }
        EntityType::Arc(arc) => {
            let mut info = EntityInfo::new(EntityKind::Arc, layer);
            info.center = Some(Point3D::from(&arc.center));
            info.radius = Some(arc.radius);
            info.start_angle = Some(arc.start_angle);
            info.end_angle = Some(arc.end_angle);
            info.length = arc.radius * (arc.end_angle - arc.start_angle).to_radians().abs();
            info
        }
        EntityType::Circle(circle) => {
            let mut info = EntityInfo::new(EntityKind::Circle, layer);
            info.center = Some(Point3D::from(&circle.center));
            info.radius = Some(circle.radius);
            info.length = 2.0 * PI * circle.radius;
            info
        }
        EntityType::LwPolyline(poly) => {
            let points = poly
                .vertices
                .iter()
                .map(|v| Point3D::new(v.x, v.y, 0.0))
                .collect();
            polyline(layer, points, poly.flags & 1 != 0)
        }
        EntityType::Polyline(poly) => {
            let points = poly
                .vertices()
                .map(|v| Point3D::new(v.location.x, v.location.y, 0.0))
                .collect();
            polyline(layer, points, poly.flags & 1 != 0)
        }
        EntityType::Spline(spline) => {
            let points: Vec<Point3D> = spline.control_points.iter().map(Point3D::from).collect();
            let mut info = EntityInfo::new(EntityKind::Spline, layer);
            info.length = path_length(&points, false);
            info.points = Some(points);
            info
        }
        other => {
            let kind = match other {
                EntityType::Text(_) => EntityKind::Text,
                EntityType::MText(_) => EntityKind::MText,
                EntityType::Insert(_) => EntityKind::Insert,
                EntityType::Ellipse(_) => EntityKind::Ellipse,
                EntityType::ModelPoint(_) => EntityKind::Point,
                _ => EntityKind::Other,
            };
            trace!(?kind, layer, "Skipping non-track entity");
            EntityInfo::new(kind, layer)
        }
    }
}

fn polyline(layer: &str, points: Vec<Point3D>, closed: bool) -> EntityInfo {
    let mut info = EntityInfo::new(EntityKind::Polyline, layer);
    info.length = path_length(&points, closed);
    info.is_closed = closed;
    info.points = Some(points);
    info
}

/// Sum of segment lengths, plus the closing segment for closed paths.
pub fn path_length(points: &[Point3D], closed: bool) -> f64 {
    let open: f64 = points.windows(2).map(|w| w[0].distance(&w[1])).sum();
    match (closed, points.first(), points.last()) {
        (true, Some(first), Some(last)) if points.len() > 1 => open + last.distance(first),
        _ => open,
    }
}

#[cfg(test)]
mod tests {
    use dxf::entities::{Arc, Circle, Entity, Line, LwPolyline};
    use dxf::LwPolylineVertex;
    use dxf::Point;

    use super::*;

    fn vertex(x: f64, y: f64) -> LwPolylineVertex {
        LwPolylineVertex {
            x,
            y,
            ..Default::default()
        }
    }

    #[test]
    fn test_line_and_arc_extraction() {
        let mut drawing = Drawing::new();
        let mut line = Entity::new(EntityType::Line(Line::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(3.0, 4.0, 0.0),
        )));
        line.common.layer = "TRACK".to_string();
        drawing.add_entity(line);
        drawing.add_entity(Entity::new(EntityType::Arc(Arc::new(
            Point::new(10.0, 10.0, 0.0),
            500.0,
            0.0,
            90.0,
        ))));

        let entities = extract_entities(&drawing);
        assert_eq!(entities.len(), 2);

        assert_eq!(entities[0].kind, EntityKind::Line);
        assert_eq!(entities[0].layer, "TRACK");
        assert!((entities[0].length - 5.0).abs() < 1e-12);

        assert_eq!(entities[1].kind, EntityKind::Arc);
        assert_eq!(entities[1].layer, "0");
        assert_eq!(entities[1].end_angle, Some(90.0));
        assert!((entities[1].length - 500.0 * PI / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_closed_polyline_includes_closing_segment() {
        let mut poly = LwPolyline::default();
        poly.vertices = vec![vertex(0.0, 0.0), vertex(100.0, 0.0), vertex(100.0, 50.0)];
        poly.flags = 1;

        let mut drawing = Drawing::new();
        drawing.add_entity(Entity::new(EntityType::LwPolyline(poly)));
        drawing.add_entity(Entity::new(EntityType::Circle(Circle::new(
            Point::new(0.0, 0.0, 0.0),
            10.0,
        ))));

        let entities = extract_entities(&drawing);
        let poly = &entities[0];
        assert_eq!(poly.kind, EntityKind::Polyline);
        assert!(poly.is_closed);
        // 100 + 50 + hypot(100, 50)
        let expected = 150.0 + (100.0f64 * 100.0 + 50.0 * 50.0).sqrt();
        assert!((poly.length - expected).abs() < 1e-9);
        assert_eq!(poly.points.as_ref().map(Vec::len), Some(3));

        assert_eq!(entities[1].kind, EntityKind::Circle);
        assert!((entities[1].length - 20.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_path_length_edge_cases() {
        assert_eq!(path_length(&[], true), 0.0);
        assert_eq!(path_length(&[Point3D::new(1.0, 1.0, 0.0)], true), 0.0);
    }
}
