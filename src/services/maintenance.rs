//! Maintenance logging and fault reporting workflows

use std::rc::Rc;

use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{
    AssetCondition, AssetPatch, AssetStatus, MaintenanceRecord, MaintenanceStatus, MaintenanceType,
};
use crate::store::AssetStore;

use super::notify::Notifier;

/// Log-maintenance form input
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MaintenanceForm {
    pub record_type: MaintenanceType,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Blank falls back to "Unknown"
    pub technician: String,
    pub status: MaintenanceStatus,
}

impl Default for MaintenanceForm {
    fn default() -> Self {
        Self {
            record_type: MaintenanceType::Preventive,
            description: String::new(),
            technician: String::new(),
            status: MaintenanceStatus::Completed,
        }
    }
}

/// Report-fault form input
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct FaultForm {
    #[validate(length(min = 1, message = "Fault description is required"))]
    pub description: String,
}

#[derive(Clone)]
pub struct MaintenanceService {
    notifier: Rc<dyn Notifier>,
}

impl MaintenanceService {
    pub fn new(notifier: Rc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Prepend a new maintenance record and stamp `last_maintenance`.
    /// A blank description blocks the whole mutation.
    pub fn log(
        &self,
        store: &mut AssetStore,
        asset_id: &str,
        form: &MaintenanceForm,
    ) -> AppResult<()> {
        form.validate()?;
        let description = form.description.trim();
        if description.is_empty() {
            return Err(AppError::Validation("Description is required".to_string()));
        }
        let technician = match form.technician.trim() {
            "" => "Unknown",
            name => name,
        };

        let asset = store
            .asset(asset_id)
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", asset_id)))?;
        let record =
            MaintenanceRecord::new(form.record_type, description, technician, form.status);
        let mut history = Vec::with_capacity(asset.maintenance_history.len() + 1);
        history.push(record.clone());
        history.extend(asset.maintenance_history.iter().cloned());

        store.update_asset(
            asset_id,
            AssetPatch {
                last_maintenance: Some(record.date),
                maintenance_history: Some(history),
                ..AssetPatch::default()
            },
        )?;
        tracing::debug!(asset_id, record_id = %record.id, "maintenance record logged");
        self.notifier.success("Maintenance record logged");
        Ok(())
    }

    /// Mark the asset faulty, degrade its condition and open a pending
    /// corrective ticket.
    pub fn report_fault(
        &self,
        store: &mut AssetStore,
        asset_id: &str,
        form: &FaultForm,
    ) -> AppResult<()> {
        form.validate()?;
        let description = form.description.trim();
        if description.is_empty() {
            return Err(AppError::Validation(
                "Fault description is required".to_string(),
            ));
        }

        let asset = store
            .asset(asset_id)
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", asset_id)))?;
        let record = MaintenanceRecord::fault_ticket(description);
        let mut history = Vec::with_capacity(asset.maintenance_history.len() + 1);
        history.push(record);
        history.extend(asset.maintenance_history.iter().cloned());

        store.update_asset(
            asset_id,
            AssetPatch {
                status: Some(AssetStatus::Faulty),
                condition: Some(AssetCondition::Poor),
                maintenance_history: Some(history),
                ..AssetPatch::default()
            },
        )?;
        tracing::warn!(asset_id, "fault reported");
        self.notifier.success("Fault reported, asset marked as faulty");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Asset, Coordinate};
    use crate::services::notify::MockNotifier;

    fn store_with_asset(id: &str) -> AssetStore {
        let mut asset = Asset::registered_at(Coordinate { lat: 0.0, lng: 0.0 });
        asset.id = id.to_string();
        AssetStore::new(vec![asset]).unwrap()
    }

    fn service(expected_notifications: usize) -> MaintenanceService {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_success()
            .times(expected_notifications)
            .return_const(());
        MaintenanceService::new(Rc::new(notifier))
    }

    #[test]
    fn test_log_prepends_and_stamps_last_maintenance() {
        let mut store = store_with_asset("P1");
        let service = service(2);
        let form = MaintenanceForm {
            description: "Greased bearings".to_string(),
            ..MaintenanceForm::default()
        };
        service.log(&mut store, "P1", &form).unwrap();
        let second = MaintenanceForm {
            description: "Replaced impeller".to_string(),
            technician: "J. Otieno".to_string(),
            record_type: MaintenanceType::Corrective,
            status: MaintenanceStatus::InProgress,
        };
        service.log(&mut store, "P1", &second).unwrap();

        let asset = store.asset("P1").unwrap();
        assert_eq!(asset.maintenance_history.len(), 2);
        // newest first
        assert_eq!(asset.maintenance_history[0].description, "Replaced impeller");
        assert_eq!(asset.maintenance_history[0].technician, "J. Otieno");
        assert_eq!(asset.maintenance_history[1].technician, "Unknown");
        assert_eq!(asset.last_maintenance, Some(asset.maintenance_history[0].date));
    }

    #[test]
    fn test_blank_description_mutates_nothing() {
        let mut store = store_with_asset("P1");
        let service = service(0);
        let form = MaintenanceForm {
            description: "   ".to_string(),
            ..MaintenanceForm::default()
        };
        assert!(matches!(
            service.log(&mut store, "P1", &form),
            Err(AppError::Validation(_))
        ));
        assert!(store.asset("P1").unwrap().maintenance_history.is_empty());
        assert_eq!(store.asset("P1").unwrap().last_maintenance, None);
    }

    #[test]
    fn test_report_fault_transitions_and_opens_ticket() {
        let mut store = store_with_asset("V7");
        let service = service(1);
        let form = FaultForm {
            description: "Gate jammed half open".to_string(),
        };
        service.report_fault(&mut store, "V7", &form).unwrap();

        let asset = store.asset("V7").unwrap();
        assert_eq!(asset.status, AssetStatus::Faulty);
        assert_eq!(asset.condition, AssetCondition::Poor);
        assert_eq!(asset.maintenance_history.len(), 1);
        let ticket = &asset.maintenance_history[0];
        assert_eq!(ticket.record_type, MaintenanceType::Corrective);
        assert_eq!(ticket.status, MaintenanceStatus::Pending);
        assert_eq!(ticket.technician, "Current User");
    }
}
