//! Maintenance history records, owned by their parent asset

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{MaintenanceStatus, MaintenanceType};

/// A material consumed by a maintenance intervention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialUsed {
    pub name: String,
    /// Positive count of units
    pub quantity: u32,
    pub unit: String,
}

/// One maintenance intervention on an asset.
///
/// Records have no lifecycle of their own: they are created through the
/// owning asset's workflows and never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    /// Unique within the owning asset's history
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub record_type: MaintenanceType,
    pub description: String,
    pub technician: String,
    pub status: MaintenanceStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials_used: Vec<MaterialUsed>,
}

impl MaintenanceRecord {
    /// Fresh record dated today
    pub fn new(
        record_type: MaintenanceType,
        description: impl Into<String>,
        technician: impl Into<String>,
        status: MaintenanceStatus,
    ) -> Self {
        Self {
            id: format!("MH-{}", Uuid::new_v4().simple()),
            date: Utc::now().date_naive(),
            record_type,
            description: description.into(),
            technician: technician.into(),
            status,
            materials_used: Vec::new(),
        }
    }

    /// Pending corrective ticket opened by the report-fault workflow
    pub fn fault_ticket(description: impl Into<String>) -> Self {
        Self::new(
            MaintenanceType::Corrective,
            description,
            "Current User",
            MaintenanceStatus::Pending,
        )
    }

    /// Completed preventive record synthesized when inventory is linked to an
    /// asset with an empty history
    pub fn inventory_link(materials: Vec<MaterialUsed>) -> Self {
        let mut record = Self::new(
            MaintenanceType::Preventive,
            "Inventory linked",
            "Current User",
            MaintenanceStatus::Completed,
        );
        record.materials_used = materials;
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_ticket_shape() {
        let record = MaintenanceRecord::fault_ticket("Leaking gland seal");
        assert_eq!(record.record_type, MaintenanceType::Corrective);
        assert_eq!(record.status, MaintenanceStatus::Pending);
        assert_eq!(record.technician, "Current User");
        assert!(record.id.starts_with("MH-"));
        assert!(record.materials_used.is_empty());
    }

    #[test]
    fn test_inventory_link_shape() {
        let materials = vec![MaterialUsed {
            name: "Chlorine".to_string(),
            quantity: 5,
            unit: "kg".to_string(),
        }];
        let record = MaintenanceRecord::inventory_link(materials.clone());
        assert_eq!(record.record_type, MaintenanceType::Preventive);
        assert_eq!(record.status, MaintenanceStatus::Completed);
        assert_eq!(record.materials_used, materials);
    }

    #[test]
    fn test_record_ids_are_unique() {
        let a = MaintenanceRecord::fault_ticket("a");
        let b = MaintenanceRecord::fault_ticket("b");
        assert_ne!(a.id, b.id);
    }
}
