//! Rendering collaborator contract.
//!
//! The actual map technology (tiles, clustering, DOM, toolkit) lives behind
//! [`MapSurface`]. The core hands over geometry + style + identity tuples and
//! receives gestures back as [`super::renderer::MapEvent`] values. Co-located
//! marker clustering is the surface's concern; the core only supplies the
//! individual markers.

use serde::{Deserialize, Serialize};

use super::style::{LineBand, MarkerStyle, PolylineStyle};
use crate::models::Coordinate;

/// Pointer style over the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapCursor {
    Default,
    /// Placement mode indicator while registering
    Crosshair,
}

/// One point marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerSpec {
    /// Clicking the marker selects this asset
    pub asset_id: String,
    pub position: Coordinate,
    pub style: MarkerStyle,
    pub tooltip: String,
}

/// One band of a line asset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolylineSpec {
    /// Stable primitive id, unique per (asset, band)
    pub id: String,
    pub asset_id: String,
    pub band: LineBand,
    pub path: Vec<Coordinate>,
    pub style: PolylineStyle,
    /// Only the interactive main band carries a tooltip
    pub tooltip: Option<String>,
    /// Whether the band reacts to clicks and hover
    pub interactive: bool,
}

/// Drawing surface implemented by the external map renderer
pub trait MapSurface {
    fn set_cursor(&mut self, cursor: MapCursor);
    /// Remove every previously drawn primitive
    fn clear(&mut self);
    fn draw_marker(&mut self, spec: MarkerSpec);
    fn draw_polyline(&mut self, spec: PolylineSpec);
    /// Restyle an already drawn band in place (hover emphasis)
    fn restyle_polyline(&mut self, id: &str, style: PolylineStyle);
}
