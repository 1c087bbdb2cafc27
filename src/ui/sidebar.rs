//! Sidebar view model: search, status summary, layer toggles, asset list
//! and the registration toggle

use crate::models::{AssetStatus, AssetType};
use crate::store::{AssetStore, FilterPatch};

/// One status summary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub status: AssetStatus,
    pub label: &'static str,
    /// Live count over the filtered view
    pub count: usize,
    /// Whether this status is part of the active filter
    pub filtering: bool,
}

/// One layer toggle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerRow {
    pub asset_type: AssetType,
    pub label: &'static str,
    /// Live count over the filtered view
    pub count: usize,
    pub visible: bool,
}

/// One asset list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRow {
    pub id: String,
    pub name: String,
    pub code: String,
    pub status: AssetStatus,
    pub type_label: &'static str,
}

/// Full sidebar snapshot, rebuilt from the store on every change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    pub search: String,
    pub status_rows: Vec<StatusRow>,
    pub point_layers: Vec<LayerRow>,
    pub linear_layers: Vec<LayerRow>,
    pub asset_rows: Vec<AssetRow>,
    pub layers_open: bool,
    pub assets_open: bool,
    pub is_registering: bool,
    /// Persistent instructional indicator while registration mode is on
    pub registration_hint: Option<&'static str>,
}

/// Sidebar panel: collapsible-section state plus store write-through
#[derive(Debug, Clone)]
pub struct Sidebar {
    pub layers_open: bool,
    pub assets_open: bool,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self {
            layers_open: true,
            assets_open: true,
        }
    }
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the current snapshot
    pub fn view(&self, store: &AssetStore) -> SidebarView {
        let filtered = store.filtered_assets();

        let status_rows = AssetStatus::ALL
            .into_iter()
            .map(|status| StatusRow {
                status,
                label: status.label(),
                count: filtered.iter().filter(|a| a.status == status).count(),
                filtering: store.filters().statuses.contains(&status),
            })
            .collect();

        let layer_row = |asset_type: AssetType| LayerRow {
            asset_type,
            label: asset_type.label(),
            count: filtered
                .iter()
                .filter(|a| a.asset_type == asset_type)
                .count(),
            visible: store.visible_layers().contains(&asset_type),
        };

        SidebarView {
            search: store.filters().search.clone(),
            status_rows,
            point_layers: AssetType::POINT.into_iter().map(layer_row).collect(),
            linear_layers: AssetType::LINEAR.into_iter().map(layer_row).collect(),
            asset_rows: filtered
                .iter()
                .map(|a| AssetRow {
                    id: a.id.clone(),
                    name: a.name.clone(),
                    code: a.code.clone(),
                    status: a.status,
                    type_label: a.asset_type.short_label(),
                })
                .collect(),
            layers_open: self.layers_open,
            assets_open: self.assets_open,
            is_registering: store.is_registering(),
            registration_hint: store
                .is_registering()
                .then_some("Click on the map to place an asset"),
        }
    }

    // -- write-through inputs ---------------------------------------------

    pub fn set_search(&self, store: &mut AssetStore, text: impl Into<String>) {
        store.set_filters(FilterPatch {
            search: Some(text.into()),
            ..FilterPatch::default()
        });
    }

    pub fn clear_search(&self, store: &mut AssetStore) {
        self.set_search(store, String::new());
    }

    /// Flip one status in the status filter
    pub fn toggle_status(&self, store: &mut AssetStore, status: AssetStatus) {
        let mut statuses = store.filters().statuses.clone();
        if !statuses.remove(&status) {
            statuses.insert(status);
        }
        store.set_filters(FilterPatch {
            statuses: Some(statuses),
            ..FilterPatch::default()
        });
    }

    pub fn toggle_layer(&self, store: &mut AssetStore, asset_type: AssetType) {
        store.toggle_layer(asset_type);
    }

    pub fn select(&self, store: &mut AssetStore, id: &str) {
        store.select_asset(Some(id));
    }

    pub fn toggle_registration(&self, store: &mut AssetStore) {
        let registering = store.is_registering();
        store.set_registering(!registering);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Asset, Coordinate};

    fn store() -> AssetStore {
        let mut source = Asset::registered_at(Coordinate { lat: 0.0, lng: 0.0 });
        source.id = "S1".to_string();
        source.name = "Ruiru Intake".to_string();
        let mut pump = Asset::registered_at(Coordinate { lat: 0.1, lng: 0.1 });
        pump.id = "P1".to_string();
        pump.asset_type = AssetType::Pump;
        pump.status = AssetStatus::Faulty;
        AssetStore::new(vec![source, pump]).unwrap()
    }

    #[test]
    fn test_counts_follow_the_filtered_view() {
        let mut store = store();
        let sidebar = Sidebar::new();

        let view = sidebar.view(&store);
        assert_eq!(view.asset_rows.len(), 2);
        let active = view
            .status_rows
            .iter()
            .find(|r| r.status == AssetStatus::Active)
            .unwrap();
        assert_eq!(active.count, 1);

        sidebar.toggle_layer(&mut store, AssetType::Pump);
        let view = sidebar.view(&store);
        assert_eq!(view.asset_rows.len(), 1);
        let faulty = view
            .status_rows
            .iter()
            .find(|r| r.status == AssetStatus::Faulty)
            .unwrap();
        assert_eq!(faulty.count, 0);
        let pump_layer = view
            .point_layers
            .iter()
            .find(|r| r.asset_type == AssetType::Pump)
            .unwrap();
        assert!(!pump_layer.visible);
    }

    #[test]
    fn test_status_toggle_round_trip() {
        let mut store = store();
        let sidebar = Sidebar::new();
        sidebar.toggle_status(&mut store, AssetStatus::Faulty);
        assert!(store.filters().statuses.contains(&AssetStatus::Faulty));
        sidebar.toggle_status(&mut store, AssetStatus::Faulty);
        assert!(store.filters().statuses.is_empty());
    }

    #[test]
    fn test_registration_toggle_shows_hint() {
        let mut store = store();
        let sidebar = Sidebar::new();
        assert_eq!(sidebar.view(&store).registration_hint, None);
        sidebar.toggle_registration(&mut store);
        let view = sidebar.view(&store);
        assert!(view.is_registering);
        assert!(view.registration_hint.is_some());
    }

    #[test]
    fn test_layer_groups_exclude_polygon_types() {
        let store = store();
        let view = Sidebar::new().view(&store);
        assert_eq!(view.point_layers.len(), 7);
        assert_eq!(view.linear_layers.len(), 2);
    }
}
