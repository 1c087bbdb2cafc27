//! Shared domain enums for water infrastructure assets

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AssetType
// ---------------------------------------------------------------------------

/// Infrastructure asset types
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    WaterSource,
    Reservoir,
    Pump,
    Valve,
    Junction,
    BulkMeter,
    TreatmentUnit,
    TransmissionPipe,
    DistributionPipe,
    TreatmentPlant,
    StorageCompound,
    ServiceZone,
}

/// Sidebar grouping for asset types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    Point,
    Linear,
    Polygon,
}

/// Geometry representation of an asset on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryKind {
    Point,
    Line,
    Polygon,
}

impl AssetType {
    /// All asset types, in sidebar order
    pub const ALL: [AssetType; 12] = [
        AssetType::WaterSource,
        AssetType::Reservoir,
        AssetType::Pump,
        AssetType::Valve,
        AssetType::Junction,
        AssetType::BulkMeter,
        AssetType::TreatmentUnit,
        AssetType::TransmissionPipe,
        AssetType::DistributionPipe,
        AssetType::TreatmentPlant,
        AssetType::StorageCompound,
        AssetType::ServiceZone,
    ];

    /// Point asset types shown in the sidebar layer toggles
    pub const POINT: [AssetType; 7] = [
        AssetType::WaterSource,
        AssetType::Reservoir,
        AssetType::Pump,
        AssetType::Valve,
        AssetType::Junction,
        AssetType::BulkMeter,
        AssetType::TreatmentUnit,
    ];

    /// Linear asset types shown in the sidebar layer toggles
    pub const LINEAR: [AssetType; 2] = [AssetType::TransmissionPipe, AssetType::DistributionPipe];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            AssetType::WaterSource => "Water Source",
            AssetType::Reservoir => "Reservoir",
            AssetType::Pump => "Pump",
            AssetType::Valve => "Valve",
            AssetType::Junction => "Junction",
            AssetType::BulkMeter => "Bulk Meter",
            AssetType::TreatmentUnit => "Treatment Unit",
            AssetType::TransmissionPipe => "Transmission Pipe",
            AssetType::DistributionPipe => "Distribution Pipe",
            AssetType::TreatmentPlant => "Treatment Plant",
            AssetType::StorageCompound => "Storage Compound",
            AssetType::ServiceZone => "Service Zone",
        }
    }

    /// Fixed type -> geometry mapping; an asset's geometry must never diverge from it
    pub fn geometry_kind(&self) -> GeometryKind {
        match self.category() {
            AssetCategory::Point => GeometryKind::Point,
            AssetCategory::Linear => GeometryKind::Line,
            AssetCategory::Polygon => GeometryKind::Polygon,
        }
    }

    /// Sidebar grouping category
    pub fn category(&self) -> AssetCategory {
        match self {
            AssetType::WaterSource
            | AssetType::Reservoir
            | AssetType::Pump
            | AssetType::Valve
            | AssetType::Junction
            | AssetType::BulkMeter
            | AssetType::TreatmentUnit => AssetCategory::Point,
            AssetType::TransmissionPipe | AssetType::DistributionPipe => AssetCategory::Linear,
            AssetType::TreatmentPlant | AssetType::StorageCompound | AssetType::ServiceZone => {
                AssetCategory::Polygon
            }
        }
    }

    /// Single letter rendered inside point markers
    pub fn marker_initial(&self) -> char {
        // label() is never empty
        self.label().chars().next().unwrap_or('?')
    }

    /// First word of the label, used in compact list rows
    pub fn short_label(&self) -> &'static str {
        self.label().split(' ').next().unwrap_or("")
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// AssetStatus
// ---------------------------------------------------------------------------

/// Operational status of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    Active,
    Faulty,
    UnderMaintenance,
    Inactive,
}

impl AssetStatus {
    /// All statuses, in status-summary order
    pub const ALL: [AssetStatus; 4] = [
        AssetStatus::Active,
        AssetStatus::Faulty,
        AssetStatus::UnderMaintenance,
        AssetStatus::Inactive,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Active => "Active",
            AssetStatus::Faulty => "Faulty",
            AssetStatus::UnderMaintenance => "Under Maintenance",
            AssetStatus::Inactive => "Inactive",
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// AssetCondition
// ---------------------------------------------------------------------------

/// Physical condition, ordered best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCondition {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl AssetCondition {
    /// All conditions, best first
    pub const ALL: [AssetCondition; 5] = [
        AssetCondition::Excellent,
        AssetCondition::Good,
        AssetCondition::Fair,
        AssetCondition::Poor,
        AssetCondition::Critical,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            AssetCondition::Excellent => "Excellent",
            AssetCondition::Good => "Good",
            AssetCondition::Fair => "Fair",
            AssetCondition::Poor => "Poor",
            AssetCondition::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for AssetCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// MaintenanceType
// ---------------------------------------------------------------------------

/// Maintenance record kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    Preventive,
    Corrective,
}

impl std::fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceType::Preventive => "Preventive",
            MaintenanceType::Corrective => "Corrective",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceStatus
// ---------------------------------------------------------------------------

/// Progress status of a maintenance record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Completed,
    Pending,
    InProgress,
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceStatus::Completed => "Completed",
            MaintenanceStatus::Pending => "Pending",
            MaintenanceStatus::InProgress => "In Progress",
        };
        write!(f, "{}", label)
    }
}
