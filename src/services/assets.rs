//! Asset field editing workflow

use std::rc::Rc;

use serde::Deserialize;

use crate::error::AppResult;
use crate::models::{Asset, AssetCondition, AssetPatch, AssetStatus};
use crate::store::AssetStore;

use super::notify::Notifier;

/// Edit-asset form input, prefilled from the current values.
/// No field is required; blank optionals clear the stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct EditAssetForm {
    pub name: String,
    pub status: AssetStatus,
    pub condition: AssetCondition,
    /// Blank clears the stored value
    pub capacity: String,
    /// Blank clears the stored value
    pub material: String,
}

impl EditAssetForm {
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            name: asset.name.clone(),
            status: asset.status,
            condition: asset.condition,
            capacity: asset.capacity.clone().unwrap_or_default(),
            material: asset.material.clone().unwrap_or_default(),
        }
    }
}

/// Blank optional strings are cleared rather than stored empty
fn optional_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Clone)]
pub struct AssetsService {
    notifier: Rc<dyn Notifier>,
}

impl AssetsService {
    pub fn new(notifier: Rc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Merge the edited fields into the asset
    pub fn edit(
        &self,
        store: &mut AssetStore,
        asset_id: &str,
        form: &EditAssetForm,
    ) -> AppResult<()> {
        store.update_asset(
            asset_id,
            AssetPatch {
                name: Some(form.name.clone()),
                status: Some(form.status),
                condition: Some(form.condition),
                capacity: Some(optional_field(&form.capacity)),
                material: Some(optional_field(&form.material)),
                ..AssetPatch::default()
            },
        )?;
        tracing::debug!(asset_id, "asset fields updated");
        self.notifier.success("Asset updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::Coordinate;
    use crate::services::notify::MockNotifier;

    fn store_with_asset(id: &str) -> AssetStore {
        let mut asset = Asset::registered_at(Coordinate { lat: 0.0, lng: 0.0 });
        asset.id = id.to_string();
        asset.capacity = Some("250 m3/h".to_string());
        AssetStore::new(vec![asset]).unwrap()
    }

    #[test]
    fn test_edit_merges_and_clears_blanks() {
        let mut store = store_with_asset("R2");
        let mut notifier = MockNotifier::new();
        notifier.expect_success().once().return_const(());
        let service = AssetsService::new(Rc::new(notifier));

        let mut form = EditAssetForm::from_asset(store.asset("R2").unwrap());
        assert_eq!(form.capacity, "250 m3/h");
        form.name = "Westlands Reservoir".to_string();
        form.condition = AssetCondition::Fair;
        form.capacity = String::new();
        form.material = "Concrete".to_string();
        service.edit(&mut store, "R2", &form).unwrap();

        let asset = store.asset("R2").unwrap();
        assert_eq!(asset.name, "Westlands Reservoir");
        assert_eq!(asset.condition, AssetCondition::Fair);
        assert_eq!(asset.capacity, None);
        assert_eq!(asset.material.as_deref(), Some("Concrete"));
    }

    #[test]
    fn test_edit_unknown_asset_is_not_found() {
        let mut store = store_with_asset("R2");
        let notifier = MockNotifier::new();
        let service = AssetsService::new(Rc::new(notifier));
        let form = EditAssetForm::from_asset(store.asset("R2").unwrap());
        assert!(matches!(
            service.edit(&mut store, "missing", &form),
            Err(AppError::NotFound(_))
        ));
    }
}
