//! Map rendering: styling tables, the surface collaborator contract and the
//! renderer that binds the store's filtered view to it

pub mod renderer;
pub mod style;
pub mod surface;

pub use renderer::{polyline_id, MapEvent, MapRenderer};
pub use style::{marker_style, polyline_style, status_color, LineBand, MarkerStyle, PolylineStyle};
pub use surface::{MapCursor, MapSurface, MarkerSpec, PolylineSpec};
