//! In-memory asset store: the single source of truth for the console.
//!
//! The store owns the asset collection and all browse state (selection,
//! filters, layer visibility, registration mode). Consumers never hold
//! copies; they subscribe for change events and re-pull the derived views
//! they need after every mutation.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::error::{AppError, AppResult};
use crate::models::{Asset, AssetPatch, AssetStatus, AssetType};

/// Change notification emitted after every committed mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    SelectionChanged,
    FiltersChanged,
    LayersChanged,
    RegistrationChanged,
    AssetAdded(String),
    AssetUpdated(String),
}

/// Active filter state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Case-insensitive substring over name, code and id; empty = no restriction
    pub search: String,
    /// Empty = no restriction
    pub statuses: BTreeSet<AssetStatus>,
    /// Empty = no restriction
    pub types: BTreeSet<AssetType>,
}

/// Partial filter update; `None` fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct FilterPatch {
    pub search: Option<String>,
    pub statuses: Option<BTreeSet<AssetStatus>>,
    pub types: Option<BTreeSet<AssetType>>,
}

type Subscriber = Box<dyn FnMut(&StoreEvent)>;

/// Owned, injectable state container for the asset collection
pub struct AssetStore {
    assets: IndexMap<String, Asset>,
    selected_id: Option<String>,
    filters: Filters,
    visible_layers: BTreeSet<AssetType>,
    registering: bool,
    subscribers: Vec<Subscriber>,
}

impl AssetStore {
    /// Build a store from the seed collection. All layers start visible,
    /// nothing is selected and no filter is active.
    pub fn new(seed: Vec<Asset>) -> AppResult<Self> {
        let mut assets = IndexMap::with_capacity(seed.len());
        for asset in seed {
            if assets.contains_key(&asset.id) {
                return Err(AppError::Conflict(format!(
                    "Duplicate asset id {} in seed collection",
                    asset.id
                )));
            }
            assets.insert(asset.id.clone(), asset);
        }
        Ok(Self {
            assets,
            selected_id: None,
            filters: Filters::default(),
            visible_layers: AssetType::ALL.into_iter().collect(),
            registering: false,
            subscribers: Vec::new(),
        })
    }

    /// Register a change subscriber. Subscribers run synchronously after
    /// every mutation and must re-pull state rather than capture it.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    fn emit(&mut self, event: StoreEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }

    // -- reads ------------------------------------------------------------

    /// All assets in insertion order
    pub fn assets(&self) -> impl Iterator<Item = &Asset> {
        self.assets.values()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.assets.get(id)
    }

    /// The selected asset, resolved against the live collection so any
    /// committed mutation is immediately visible through the selection.
    pub fn selected_asset(&self) -> Option<&Asset> {
        self.selected_id.as_deref().and_then(|id| self.assets.get(id))
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn visible_layers(&self) -> &BTreeSet<AssetType> {
        &self.visible_layers
    }

    pub fn is_registering(&self) -> bool {
        self.registering
    }

    /// Derived filtered view: conjunction of layer visibility, type filter,
    /// status filter and search. Recomputed on every call.
    pub fn filtered_assets(&self) -> Vec<&Asset> {
        self.assets
            .values()
            .filter(|a| self.visible_layers.contains(&a.asset_type))
            .filter(|a| self.filters.types.is_empty() || self.filters.types.contains(&a.asset_type))
            .filter(|a| {
                self.filters.statuses.is_empty() || self.filters.statuses.contains(&a.status)
            })
            .filter(|a| self.filters.search.is_empty() || a.matches_search(&self.filters.search))
            .collect()
    }

    // -- mutations --------------------------------------------------------

    /// Set or clear the selection. A non-null selection opens the detail
    /// view; null closes it.
    pub fn select_asset(&mut self, id: Option<&str>) {
        self.selected_id = id.map(str::to_string);
        self.emit(StoreEvent::SelectionChanged);
    }

    /// Merge a partial filter update
    pub fn set_filters(&mut self, patch: FilterPatch) {
        if let Some(search) = patch.search {
            self.filters.search = search;
        }
        if let Some(statuses) = patch.statuses {
            self.filters.statuses = statuses;
        }
        if let Some(types) = patch.types {
            self.filters.types = types;
        }
        self.emit(StoreEvent::FiltersChanged);
    }

    /// Flip one layer's visibility
    pub fn toggle_layer(&mut self, asset_type: AssetType) {
        if !self.visible_layers.remove(&asset_type) {
            self.visible_layers.insert(asset_type);
        }
        self.emit(StoreEvent::LayersChanged);
    }

    /// Enter or leave click-to-register mode
    pub fn set_registering(&mut self, registering: bool) {
        self.registering = registering;
        self.emit(StoreEvent::RegistrationChanged);
    }

    /// Append a new asset and leave registration mode. The id must be new.
    pub fn add_asset(&mut self, asset: Asset) -> AppResult<()> {
        if self.assets.contains_key(&asset.id) {
            return Err(AppError::Conflict(format!(
                "Asset {} already exists",
                asset.id
            )));
        }
        let id = asset.id.clone();
        self.assets.insert(id.clone(), asset);
        self.registering = false;
        self.emit(StoreEvent::AssetAdded(id));
        Ok(())
    }

    /// Merge a partial update into the asset with the given id
    pub fn update_asset(&mut self, id: &str, patch: AssetPatch) -> AppResult<()> {
        let asset = self
            .assets
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))?;
        asset.apply(patch);
        self.emit(StoreEvent::AssetUpdated(id.to_string()));
        Ok(())
    }
}
