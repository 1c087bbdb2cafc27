//! Map rendering and gesture handling over the store's filtered view

use crate::error::AppResult;
use crate::models::{Asset, Coordinate, Geometry};
use crate::store::AssetStore;

use super::style::{marker_style, polyline_style, LineBand};
use super::surface::{MapCursor, MapSurface, MarkerSpec, PolylineSpec};

/// Map gestures delivered by the surface
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Click on the bare map; creates an asset while registration is on
    MapClick(Coordinate),
    /// Click on a marker or a main pipe band
    AssetClick(String),
    HoverEnter(String),
    HoverExit(String),
}

/// Stable primitive id for one band of a line asset
pub fn polyline_id(asset_id: &str, band: LineBand) -> String {
    match band {
        LineBand::Glow => format!("{}:glow", asset_id),
        LineBand::Main => format!("{}:main", asset_id),
    }
}

fn marker_tooltip(asset: &Asset) -> String {
    format!("{}\n{}", asset.name, asset.code)
}

fn line_tooltip(asset: &Asset) -> String {
    format!(
        "{}\n{} · {} {}",
        asset.name,
        asset.code,
        asset.diameter.as_deref().unwrap_or(""),
        asset.material.as_deref().unwrap_or(""),
    )
    .trim_end()
    .to_string()
}

/// Translates the filtered view into surface primitives and surface gestures
/// into store operations.
#[derive(Debug, Default)]
pub struct MapRenderer;

impl MapRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Total, idempotent redraw: clears the surface and redraws everything
    /// from the current filtered view. Lines go first so markers stack on
    /// top; polygon assets are not rendered.
    pub fn render(&self, store: &AssetStore, surface: &mut dyn MapSurface) {
        surface.clear();
        surface.set_cursor(if store.is_registering() {
            MapCursor::Crosshair
        } else {
            MapCursor::Default
        });

        let visible = store.filtered_assets();

        for asset in &visible {
            if let Geometry::Line(path) = &asset.geometry {
                for band in [LineBand::Glow, LineBand::Main] {
                    surface.draw_polyline(PolylineSpec {
                        id: polyline_id(&asset.id, band),
                        asset_id: asset.id.clone(),
                        band,
                        path: path.clone(),
                        style: polyline_style(asset.asset_type, asset.status, band, false),
                        tooltip: (band == LineBand::Main).then(|| line_tooltip(asset)),
                        interactive: band == LineBand::Main,
                    });
                }
            }
        }

        for asset in &visible {
            if let Geometry::Point(position) = &asset.geometry {
                surface.draw_marker(MarkerSpec {
                    asset_id: asset.id.clone(),
                    position: *position,
                    style: marker_style(asset.asset_type, asset.status),
                    tooltip: marker_tooltip(asset),
                });
            }
        }

        tracing::trace!(shown = visible.len(), "map redrawn");
    }

    /// Apply one gesture to the store/surface
    pub fn handle_event(
        &self,
        store: &mut AssetStore,
        surface: &mut dyn MapSurface,
        event: MapEvent,
    ) -> AppResult<()> {
        match event {
            MapEvent::MapClick(position) => {
                if store.is_registering() {
                    // one asset per click; add_asset leaves registration mode
                    let asset = Asset::registered_at(position);
                    tracing::info!(id = %asset.id, lat = position.lat, lng = position.lng, "asset registered from map click");
                    store.add_asset(asset)?;
                }
                Ok(())
            }
            MapEvent::AssetClick(id) => {
                store.select_asset(Some(&id));
                Ok(())
            }
            MapEvent::HoverEnter(id) => {
                self.restyle_bands(store, surface, &id, true);
                Ok(())
            }
            MapEvent::HoverExit(id) => {
                self.restyle_bands(store, surface, &id, false);
                Ok(())
            }
        }
    }

    fn restyle_bands(
        &self,
        store: &AssetStore,
        surface: &mut dyn MapSurface,
        asset_id: &str,
        hovered: bool,
    ) {
        let Some(asset) = store.asset(asset_id) else {
            return;
        };
        if !matches!(asset.geometry, Geometry::Line(_)) {
            return;
        }
        for band in [LineBand::Glow, LineBand::Main] {
            surface.restyle_polyline(
                &polyline_id(asset_id, band),
                polyline_style(asset.asset_type, asset.status, band, hovered),
            );
        }
    }
}
