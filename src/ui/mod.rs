//! View models for the console panels.
//!
//! The panels never hold asset state of their own; they are rebuilt from the
//! store after every change event and write back exclusively through the
//! store operations and workflow services.

pub mod detail;
pub mod sidebar;
pub mod status_bar;

pub use detail::{ActiveDialog, DetailPanel, DetailView};
pub use sidebar::{AssetRow, LayerRow, Sidebar, SidebarView, StatusRow};
pub use status_bar::StatusBarView;
