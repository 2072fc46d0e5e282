//! Import pipeline: format check, parse, classify, mesh, suggest.

use std::path::Path;

use tracing::{info, warn};

use conveyor_core::config::CadImportConfig;

use crate::classifier::classify;
use crate::error::CadImportError;
use crate::mesh::MeshBuilder;
use crate::models::{
    BoundingBox, CadImportResult, EntityInfo, Point3D, SectionType, SuggestedConfig, TrackSection,
};
use crate::parser::{extract_entities, load_drawing};

/// Drawing formats recognised by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CadFormat {
    Dxf,
    Dwg,
}

impl CadFormat {
    /// Detect the format from a file name, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Result<Self, CadImportError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_lowercase()))
            .unwrap_or_default();
        match extension.as_str() {
            ".dxf" => Ok(Self::Dxf),
            ".dwg" => Ok(Self::Dwg),
            _ => Err(CadImportError::UnsupportedFormat { extension }),
        }
    }
}

/// Stateless DXF importer configured with classification thresholds.
#[derive(Debug, Clone, Default)]
pub struct CadImporter {
    config: CadImportConfig,
}

impl CadImporter {
    pub fn new(config: CadImportConfig) -> Self {
        Self { config }
    }

    /// Import a drawing, folding any failure into an unsuccessful result.
    pub fn import(&self, file_name: &str, bytes: &[u8]) -> CadImportResult {
        match self.try_import(file_name, bytes) {
            Ok(result) => result,
            Err(err) => {
                warn!(file_name, error = %err, "CAD import failed");
                CadImportResult::failure(file_name, err.to_string())
            }
        }
    }

    /// Import a drawing, returning the failure reason as an error.
    pub fn try_import(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<CadImportResult, CadImportError> {
        let format = CadFormat::from_file_name(file_name)?;
        if bytes.len() > self.config.max_file_bytes {
            return Err(CadImportError::FileTooLarge {
                size: bytes.len(),
                limit: self.config.max_file_bytes,
            });
        }

        let drawing = match format {
            CadFormat::Dxf => load_drawing(bytes)?,
            CadFormat::Dwg => return Err(CadImportError::DwgNotSupported),
        };

        let result = self.analyze(file_name, extract_entities(&drawing));
        info!(
            file_name,
            entities = result.entities.len(),
            track_sections = result.track_sections.len(),
            total_track_length = result.total_track_length,
            curve_count = result.curve_count,
            "CAD file imported"
        );
        Ok(result)
    }

    /// Classify extracted entities and assemble the import result.
    pub fn analyze(&self, file_name: &str, entities: Vec<EntityInfo>) -> CadImportResult {
        let mut mesh = MeshBuilder::new(&self.config);
        let mut track_sections = Vec::new();
        for entity in &entities {
            mesh.add_entity(entity);
            if let Some(section) = classify(entity, &self.config) {
                track_sections.push(section);
            }
        }

        let total_track_length = sum_lengths(&track_sections, SectionType::Straight);
        let total_curve_length = sum_lengths(&track_sections, SectionType::Curve);
        let curve_count = track_sections
            .iter()
            .filter(|s| s.section_type == SectionType::Curve)
            .count();
        let bounding_box = bounding_box(&entities);

        let suggested = self.suggest(
            total_track_length + total_curve_length,
            bounding_box.as_ref(),
            &track_sections,
            curve_count,
        );

        CadImportResult {
            success: true,
            error: None,
            file_name: Some(file_name.to_string()),
            entities,
            track_sections,
            total_track_length,
            total_curve_length,
            curve_count,
            bounding_box,
            mesh_data: Some(mesh.finish()),
            suggested_config: Some(suggested),
        }
    }

    fn suggest(
        &self,
        track_length: f64,
        bbox: Option<&BoundingBox>,
        sections: &[TrackSection],
        curve_count: usize,
    ) -> SuggestedConfig {
        let height_from_floor = bbox
            .map(|b| b.max.z)
            .filter(|z| *z > 0.0)
            .unwrap_or(self.config.default_height_from_floor_mm);

        let radii: Vec<f64> = sections
            .iter()
            .filter(|s| s.section_type == SectionType::Curve)
            .filter_map(|s| s.radius)
            .collect();
        let curve_radius = if radii.is_empty() {
            self.config.default_curve_radius_mm
        } else {
            radii.iter().sum::<f64>() / radii.len() as f64
        };

        let spacing = self.config.default_carrier_spacing_mm;
        let num_carriers = ((track_length / spacing).floor() as i32).max(1);

        SuggestedConfig {
            track_length,
            height_from_floor,
            suggested_profile: self.config.suggested_profile.clone(),
            include_curves: curve_count > 0,
            curve_radius,
            curve_count,
            num_carriers,
            carrier_spacing: spacing,
        }
    }
}

fn sum_lengths(sections: &[TrackSection], section_type: SectionType) -> f64 {
    sections
        .iter()
        .filter(|s| s.section_type == section_type)
        .map(|s| s.length)
        .sum()
}

/// Box over every recorded point, widened by the radius of arcs and circles
/// in X and Y. `None` when no entity carries coordinates.
pub fn bounding_box(entities: &[EntityInfo]) -> Option<BoundingBox> {
    let mut min = Point3D::new(f64::MAX, f64::MAX, f64::MAX);
    let mut max = Point3D::new(f64::MIN, f64::MIN, f64::MIN);
    let mut seen = false;

    let mut include = |p: &Point3D, min: &mut Point3D, max: &mut Point3D| {
        seen = true;
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        min.z = min.z.min(p.z);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
        max.z = max.z.max(p.z);
    };

    for entity in entities {
        let singles = [entity.start_point, entity.end_point, entity.center];
        for p in singles.iter().flatten() {
            include(p, &mut min, &mut max);
        }
        for p in entity.points.iter().flatten() {
            include(p, &mut min, &mut max);
        }
        if let (Some(c), Some(r)) = (entity.center, entity.radius) {
            min.x = min.x.min(c.x - r);
            min.y = min.y.min(c.y - r);
            max.x = max.x.max(c.x + r);
            max.y = max.y.max(c.y + r);
        }
    }

    seen.then(|| BoundingBox {
        width: max.x - min.x,
        height: max.y - min.y,
        depth: max.z - min.z,
        min,
        max,
    })
}
