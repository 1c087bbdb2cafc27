//! Bottom status bar snapshot

use crate::models::AssetStatus;
use crate::store::AssetStore;

/// Live global counters shown along the bottom edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarView {
    /// Counts over the whole collection, not the filtered view
    pub total: usize,
    pub active: usize,
    pub faulty: usize,
    pub under_maintenance: usize,
    /// Size of the filtered view ("Showing X of Y")
    pub shown: usize,
    pub is_registering: bool,
    pub version: &'static str,
}

impl StatusBarView {
    pub fn build(store: &AssetStore) -> Self {
        let count = |status: AssetStatus| store.assets().filter(|a| a.status == status).count();
        Self {
            total: store.len(),
            active: count(AssetStatus::Active),
            faulty: count(AssetStatus::Faulty),
            under_maintenance: count(AssetStatus::UnderMaintenance),
            shown: store.filtered_assets().len(),
            is_registering: store.is_registering(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Asset, Coordinate};
    use crate::store::FilterPatch;

    #[test]
    fn test_totals_ignore_filters_but_shown_does_not() {
        let mut faulty = Asset::registered_at(Coordinate { lat: 0.0, lng: 0.0 });
        faulty.id = "F1".to_string();
        faulty.status = AssetStatus::Faulty;
        let mut active = Asset::registered_at(Coordinate { lat: 0.1, lng: 0.1 });
        active.id = "A1".to_string();
        let mut store = AssetStore::new(vec![faulty, active]).unwrap();

        store.set_filters(FilterPatch {
            statuses: Some([AssetStatus::Active].into_iter().collect()),
            ..FilterPatch::default()
        });

        let view = StatusBarView::build(&store);
        assert_eq!(view.total, 2);
        assert_eq!(view.faulty, 1);
        assert_eq!(view.active, 1);
        assert_eq!(view.shown, 1);
    }
}
