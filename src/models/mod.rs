//! Data models for FlowiusManage

pub mod asset;
pub mod enums;
pub mod maintenance;

// Re-export commonly used types
pub use asset::{Asset, AssetPatch, Coordinate, Geometry};
pub use enums::{
    AssetCategory, AssetCondition, AssetStatus, AssetType, GeometryKind, MaintenanceStatus,
    MaintenanceType,
};
pub use maintenance::{MaintenanceRecord, MaterialUsed};
