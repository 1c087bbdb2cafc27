//! Inventory linking workflow

use std::rc::Rc;

use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{AssetPatch, MaintenanceRecord, MaterialUsed};
use crate::store::AssetStore;

use super::notify::Notifier;

/// One editable material row
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MaterialRow {
    /// Rows with a blank name are dropped on submit
    pub name: String,
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: u32,
    /// Blank falls back to "units"
    pub unit: String,
}

impl Default for MaterialRow {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: 1,
            unit: "units".to_string(),
        }
    }
}

/// Link-inventory form input: a dynamically extendable list of rows
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InventoryForm {
    #[validate(nested)]
    pub rows: Vec<MaterialRow>,
}

impl Default for InventoryForm {
    fn default() -> Self {
        Self {
            rows: vec![MaterialRow::default()],
        }
    }
}

impl InventoryForm {
    pub fn add_row(&mut self) {
        self.rows.push(MaterialRow::default());
    }

    /// Rows kept after trimming: non-blank name, defaulted unit
    fn materials(&self) -> Vec<MaterialUsed> {
        self.rows
            .iter()
            .filter(|row| !row.name.trim().is_empty())
            .map(|row| MaterialUsed {
                name: row.name.trim().to_string(),
                quantity: row.quantity,
                unit: match row.unit.trim() {
                    "" => "units".to_string(),
                    unit => unit.to_string(),
                },
            })
            .collect()
    }
}

#[derive(Clone)]
pub struct InventoryService {
    notifier: Rc<dyn Notifier>,
}

impl InventoryService {
    pub fn new(notifier: Rc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Attach the submitted materials to the newest maintenance record, or
    /// synthesize a completed preventive record when the history is empty.
    pub fn link(
        &self,
        store: &mut AssetStore,
        asset_id: &str,
        form: &InventoryForm,
    ) -> AppResult<()> {
        form.validate()?;
        let materials = form.materials();
        if materials.is_empty() {
            return Err(AppError::Validation(
                "At least one named material is required".to_string(),
            ));
        }

        let asset = store
            .asset(asset_id)
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", asset_id)))?;
        let history: Vec<MaintenanceRecord> = if asset.maintenance_history.is_empty() {
            vec![MaintenanceRecord::inventory_link(materials)]
        } else {
            let mut history = asset.maintenance_history.clone();
            history[0].materials_used.extend(materials);
            history
        };

        store.update_asset(
            asset_id,
            AssetPatch {
                maintenance_history: Some(history),
                ..AssetPatch::default()
            },
        )?;
        tracing::debug!(asset_id, "inventory linked");
        self.notifier.success("Inventory linked to asset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Asset, Coordinate, MaintenanceStatus, MaintenanceType};
    use crate::services::notify::MockNotifier;

    fn store_with_asset(id: &str) -> AssetStore {
        let mut asset = Asset::registered_at(Coordinate { lat: 0.0, lng: 0.0 });
        asset.id = id.to_string();
        AssetStore::new(vec![asset]).unwrap()
    }

    fn chlorine_form() -> InventoryForm {
        InventoryForm {
            rows: vec![MaterialRow {
                name: "Chlorine".to_string(),
                quantity: 5,
                unit: "kg".to_string(),
            }],
        }
    }

    #[test]
    fn test_link_synthesizes_record_then_appends() {
        let mut store = store_with_asset("T3");
        let mut notifier = MockNotifier::new();
        notifier.expect_success().times(2).return_const(());
        let service = InventoryService::new(Rc::new(notifier));

        service.link(&mut store, "T3", &chlorine_form()).unwrap();
        {
            let asset = store.asset("T3").unwrap();
            assert_eq!(asset.maintenance_history.len(), 1);
            let record = &asset.maintenance_history[0];
            assert_eq!(record.record_type, MaintenanceType::Preventive);
            assert_eq!(record.status, MaintenanceStatus::Completed);
            assert_eq!(record.materials_used.len(), 1);
        }

        // second link goes to the existing latest record, no new record
        service.link(&mut store, "T3", &chlorine_form()).unwrap();
        let asset = store.asset("T3").unwrap();
        assert_eq!(asset.maintenance_history.len(), 1);
        assert_eq!(asset.maintenance_history[0].materials_used.len(), 2);
    }

    #[test]
    fn test_blank_rows_are_dropped_and_unit_defaults() {
        let form = InventoryForm {
            rows: vec![
                MaterialRow {
                    name: "  PVC solvent  ".to_string(),
                    quantity: 2,
                    unit: "  ".to_string(),
                },
                MaterialRow::default(),
            ],
        };
        let materials = form.materials();
        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].name, "PVC solvent");
        assert_eq!(materials[0].unit, "units");
    }

    #[test]
    fn test_all_blank_rows_block_submission() {
        let mut store = store_with_asset("T3");
        let notifier = MockNotifier::new();
        let service = InventoryService::new(Rc::new(notifier));
        let err = service
            .link(&mut store, "T3", &InventoryForm::default())
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(store.asset("T3").unwrap().maintenance_history.is_empty());
    }

    #[test]
    fn test_zero_quantity_fails_validation() {
        let mut store = store_with_asset("T3");
        let notifier = MockNotifier::new();
        let service = InventoryService::new(Rc::new(notifier));
        let form = InventoryForm {
            rows: vec![MaterialRow {
                name: "Gasket".to_string(),
                quantity: 0,
                unit: "pcs".to_string(),
            }],
        };
        assert!(matches!(
            service.link(&mut store, "T3", &form),
            Err(AppError::Validation(_))
        ));
    }
}
