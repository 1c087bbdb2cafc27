//! Asset model and partial-update types

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{AssetCondition, AssetStatus, AssetType, GeometryKind};
use super::maintenance::MaintenanceRecord;

/// WGS84 coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Asset geometry; exactly one representation per asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "coordinates", rename_all = "snake_case")]
pub enum Geometry {
    Point(Coordinate),
    /// Ordered path, at least 2 points
    Line(Vec<Coordinate>),
    /// Ordered ring, at least 3 points
    Polygon(Vec<Coordinate>),
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::Line(_) => GeometryKind::Line,
            Geometry::Polygon(_) => GeometryKind::Polygon,
        }
    }

    pub fn as_point(&self) -> Option<Coordinate> {
        match self {
            Geometry::Point(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&[Coordinate]> {
        match self {
            Geometry::Line(path) | Geometry::Polygon(path) => Some(path),
            Geometry::Point(_) => None,
        }
    }

    /// Representative coordinate: the point itself, or the first vertex
    pub fn anchor(&self) -> Coordinate {
        match self {
            Geometry::Point(c) => *c,
            Geometry::Line(path) | Geometry::Polygon(path) => {
                path.first().copied().unwrap_or(Coordinate { lat: 0.0, lng: 0.0 })
            }
        }
    }

    /// Minimum point counts: 2 for a line, 3 for a polygon
    pub fn has_min_points(&self) -> bool {
        match self {
            Geometry::Point(_) => true,
            Geometry::Line(path) => path.len() >= 2,
            Geometry::Polygon(ring) => ring.len() >= 3,
        }
    }
}

/// A tracked piece of water infrastructure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique, immutable after creation
    pub id: String,
    /// Human-readable unique label
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub status: AssetStatus,
    pub condition: AssetCondition,
    pub geometry: Geometry,
    pub installation_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_maintenance: Option<NaiveDate>,
    /// Newest first; records are prepended, never removed or re-sorted
    #[serde(default)]
    pub maintenance_history: Vec<MaintenanceRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Asset {
    /// Default point asset placed by the click-to-register workflow
    pub fn registered_at(position: Coordinate) -> Self {
        let serial = Uuid::new_v4().simple().to_string();
        Self {
            id: format!("NEW-{}", serial),
            code: format!("AST-{}", serial[..8].to_uppercase()),
            name: "New Asset".to_string(),
            asset_type: AssetType::WaterSource,
            status: AssetStatus::Active,
            condition: AssetCondition::Good,
            geometry: Geometry::Point(position),
            installation_date: Utc::now().date_naive(),
            capacity: None,
            diameter: None,
            material: None,
            last_maintenance: None,
            maintenance_history: Vec::new(),
            photos: Vec::new(),
            notes: None,
        }
    }

    /// True when the geometry matches the fixed type mapping and point minimums
    pub fn geometry_consistent(&self) -> bool {
        self.geometry.kind() == self.asset_type.geometry_kind() && self.geometry.has_min_points()
    }

    /// Case-insensitive substring match over name, code and id
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.code.to_lowercase().contains(&needle)
            || self.id.to_lowercase().contains(&needle)
    }

    /// Merge a partial update into this asset
    pub fn apply(&mut self, patch: AssetPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(condition) = patch.condition {
            self.condition = condition;
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = capacity;
        }
        if let Some(diameter) = patch.diameter {
            self.diameter = diameter;
        }
        if let Some(material) = patch.material {
            self.material = material;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(last_maintenance) = patch.last_maintenance {
            self.last_maintenance = Some(last_maintenance);
        }
        if let Some(history) = patch.maintenance_history {
            self.maintenance_history = history;
        }
    }
}

/// Partial asset update.
///
/// Plain `Option` fields are left untouched when `None`. The optional string
/// attributes are tri-state: outer `None` leaves the field, `Some(None)`
/// clears it, `Some(Some(v))` sets it (the edit workflow clears blanks).
#[derive(Debug, Clone, Default)]
pub struct AssetPatch {
    pub name: Option<String>,
    pub status: Option<AssetStatus>,
    pub condition: Option<AssetCondition>,
    pub capacity: Option<Option<String>>,
    pub diameter: Option<Option<String>>,
    pub material: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub last_maintenance: Option<NaiveDate>,
    pub maintenance_history: Option<Vec<MaintenanceRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate { lat, lng }
    }

    #[test]
    fn test_registered_asset_defaults() {
        let asset = Asset::registered_at(coord(-1.286, 36.817));
        assert_eq!(asset.asset_type, AssetType::WaterSource);
        assert_eq!(asset.status, AssetStatus::Active);
        assert_eq!(asset.condition, AssetCondition::Good);
        assert!(asset.maintenance_history.is_empty());
        assert!(asset.id.starts_with("NEW-"));
        assert!(asset.code.starts_with("AST-"));
        assert!(asset.geometry_consistent());
    }

    #[test]
    fn test_geometry_consistency_checks_min_points() {
        let mut asset = Asset::registered_at(coord(0.0, 0.0));
        asset.asset_type = AssetType::TransmissionPipe;
        asset.geometry = Geometry::Line(vec![coord(0.0, 0.0)]);
        assert!(!asset.geometry_consistent());
        asset.geometry = Geometry::Line(vec![coord(0.0, 0.0), coord(0.1, 0.1)]);
        assert!(asset.geometry_consistent());
    }

    #[test]
    fn test_patch_merges_and_clears() {
        let mut asset = Asset::registered_at(coord(0.0, 0.0));
        asset.capacity = Some("500 m3".to_string());
        asset.apply(AssetPatch {
            name: Some("Kabete Intake".to_string()),
            status: Some(AssetStatus::Inactive),
            capacity: Some(None),
            material: Some(Some("HDPE".to_string())),
            ..AssetPatch::default()
        });
        assert_eq!(asset.name, "Kabete Intake");
        assert_eq!(asset.status, AssetStatus::Inactive);
        assert_eq!(asset.capacity, None);
        assert_eq!(asset.material.as_deref(), Some("HDPE"));
        // untouched fields survive the merge
        assert_eq!(asset.condition, AssetCondition::Good);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut asset = Asset::registered_at(coord(0.0, 0.0));
        asset.code = "pump-1a".to_string();
        assert!(asset.matches_search("PUMP-1"));
        assert!(!asset.matches_search("valve"));
    }
}
