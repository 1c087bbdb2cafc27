//! Detail panel: selected-asset view and the workflow dialog state machine

use crate::error::{AppError, AppResult};
use crate::models::{Asset, Coordinate};
use crate::services::assets::EditAssetForm;
use crate::services::inventory::InventoryForm;
use crate::services::maintenance::{FaultForm, MaintenanceForm};
use crate::services::Services;
use crate::store::AssetStore;

/// Workflow dialog state. `None` is the hub; each workflow variant owns its
/// form, so only one workflow can ever be open.
#[derive(Debug, Clone, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Maintenance(MaintenanceForm),
    Fault(FaultForm),
    Edit(EditAssetForm),
    Inventory(InventoryForm),
}

impl ActiveDialog {
    pub fn is_none(&self) -> bool {
        matches!(self, ActiveDialog::None)
    }
}

/// Read-only snapshot of the selected asset for display
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView<'a> {
    pub asset: &'a Asset,
    pub type_label: &'static str,
    pub status_label: &'static str,
    pub condition_label: &'static str,
    /// Point position or first vertex, for the lat/lng fields
    pub position: Coordinate,
    pub history_len: usize,
}

/// The detail/edit panel. Visible whenever an asset is selected.
#[derive(Debug, Default)]
pub struct DetailPanel {
    dialog: ActiveDialog,
}

impl DetailPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dialog(&self) -> &ActiveDialog {
        &self.dialog
    }

    /// Mutable access for filling form fields while a workflow is open
    pub fn dialog_mut(&mut self) -> &mut ActiveDialog {
        &mut self.dialog
    }

    /// Snapshot of the selected asset, if any
    pub fn view<'a>(&self, store: &'a AssetStore) -> Option<DetailView<'a>> {
        let asset = store.selected_asset()?;
        Some(DetailView {
            asset,
            type_label: asset.asset_type.label(),
            status_label: asset.status.label(),
            condition_label: asset.condition.label(),
            position: asset.geometry.anchor(),
            history_len: asset.maintenance_history.len(),
        })
    }

    // -- dialog transitions -----------------------------------------------
    //
    // Workflows only open from the hub; an open request while another
    // workflow is active is ignored rather than discarding its form.

    pub fn open_maintenance(&mut self) -> bool {
        self.open(ActiveDialog::Maintenance(MaintenanceForm::default()))
    }

    pub fn open_fault(&mut self) -> bool {
        self.open(ActiveDialog::Fault(FaultForm::default()))
    }

    /// Prefills the form from the asset's current values
    pub fn open_edit(&mut self, asset: &Asset) -> bool {
        self.open(ActiveDialog::Edit(EditAssetForm::from_asset(asset)))
    }

    pub fn open_inventory(&mut self) -> bool {
        self.open(ActiveDialog::Inventory(InventoryForm::default()))
    }

    fn open(&mut self, dialog: ActiveDialog) -> bool {
        if self.dialog.is_none() {
            self.dialog = dialog;
            true
        } else {
            false
        }
    }

    /// Close the open workflow without committing anything
    pub fn cancel(&mut self) {
        self.dialog = ActiveDialog::None;
    }

    /// Deselect and drop any open workflow
    pub fn close(&mut self, store: &mut AssetStore) {
        store.select_asset(None);
        self.dialog = ActiveDialog::None;
    }

    /// Submit the open workflow against the selected asset.
    ///
    /// The mutation commits before the dialog closes; a validation failure
    /// leaves the dialog open with its form intact and the store untouched.
    pub fn submit(&mut self, store: &mut AssetStore, services: &Services) -> AppResult<()> {
        let asset_id = store
            .selected_asset()
            .map(|a| a.id.clone())
            .ok_or_else(|| AppError::Validation("No asset selected".to_string()))?;

        match &self.dialog {
            ActiveDialog::None => {
                return Err(AppError::Validation("No workflow is open".to_string()))
            }
            ActiveDialog::Maintenance(form) => {
                services.maintenance.log(store, &asset_id, form)?;
            }
            ActiveDialog::Fault(form) => {
                services.maintenance.report_fault(store, &asset_id, form)?;
            }
            ActiveDialog::Edit(form) => {
                services.assets.edit(store, &asset_id, form)?;
            }
            ActiveDialog::Inventory(form) => {
                services.inventory.link(store, &asset_id, form)?;
            }
        }
        self.dialog = ActiveDialog::None;
        Ok(())
    }
}
