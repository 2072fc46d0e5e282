//! Import result models. All serialize as camelCase JSON.

use serde::{Deserialize, Serialize};

use conveyor_entity::configuration::OverheadConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Point3D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<&dxf::Point> for Point3D {
    fn from(p: &dxf::Point) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

/// Drawing entity types the importer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Line,
    Arc,
    Circle,
    /// Lightweight or classic polyline.
    Polyline,
    Spline,
    Text,
    MText,
    Insert,
    Ellipse,
    Point,
    Other,
}

/// One model-space entity as extracted from the drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityInfo {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub layer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_point: Option<Point3D>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_point: Option<Point3D>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Point3D>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_angle: Option<f64>,
    /// Degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_angle: Option<f64>,
    pub length: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Point3D>>,
    pub is_closed: bool,
}

impl EntityInfo {
    pub fn new(kind: EntityKind, layer: impl Into<String>) -> Self {
        Self {
            kind,
            layer: layer.into(),
            start_point: None,
            end_point: None,
            center: None,
            radius: None,
            start_angle: None,
            end_angle: None,
            length: 0.0,
            points: None,
            is_closed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionType {
    Straight,
    Curve,
}

/// An entity recognised as part of the track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSection {
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub length: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Swept angle in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_point: Option<Point3D>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_point: Option<Point3D>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Point3D>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Point3D>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3D,
    pub max: Point3D,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// Flat triangle mesh: xyz triples and triangle indices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub vertices: Vec<f32>,
    /// Always empty; viewers compute their own.
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Overhead conveyor parameters derived from the drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedConfig {
    pub track_length: f64,
    pub height_from_floor: f64,
    pub suggested_profile: String,
    pub include_curves: bool,
    pub curve_radius: f64,
    pub curve_count: usize,
    pub num_carriers: i32,
    pub carrier_spacing: f64,
}

impl SuggestedConfig {
    /// Default overhead configuration with the suggested values applied.
    pub fn to_overhead_config(&self) -> OverheadConfig {
        OverheadConfig {
            track_length: self.track_length,
            height_from_floor: self.height_from_floor,
            track_profile: self.suggested_profile.clone(),
            carrier_spacing: self.carrier_spacing,
            num_carriers: self.num_carriers,
            include_curves: self.include_curves,
            curve_radius: self.curve_radius,
            ..OverheadConfig::default()
        }
    }
}

/// Outcome of importing one drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CadImportResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub file_name: Option<String>,
    pub entities: Vec<EntityInfo>,
    pub track_sections: Vec<TrackSection>,
    pub total_track_length: f64,
    pub total_curve_length: f64,
    pub curve_count: usize,
    pub bounding_box: Option<BoundingBox>,
    pub mesh_data: Option<MeshData>,
    pub suggested_config: Option<SuggestedConfig>,
}

impl CadImportResult {
    pub fn failure(file_name: &str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            file_name: Some(file_name.to_string()),
            entities: Vec::new(),
            track_sections: Vec::new(),
            total_track_length: 0.0,
            total_curve_length: 0.0,
            curve_count: 0,
            bounding_box: None,
            mesh_data: None,
            suggested_config: None,
        }
    }
}
