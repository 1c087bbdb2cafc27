//! FlowiusManage GIS Infrastructure Console
//!
//! A Rust implementation of the FlowiusManage water-utility asset console
//! core: one authoritative asset store with derived filtered views, map
//! rendering primitives behind a surface contract, sidebar/detail/status
//! view models, and the maintenance workflows.

use std::rc::Rc;

pub mod config;
pub mod error;
pub mod map;
pub mod models;
pub mod seed;
pub mod services;
pub mod store;
pub mod ui;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use store::{AssetStore, FilterPatch, Filters, StoreEvent};

/// Everything one console session owns
pub struct Console {
    pub config: AppConfig,
    pub store: AssetStore,
    pub services: services::Services,
    pub renderer: map::MapRenderer,
    pub sidebar: ui::Sidebar,
    pub detail: ui::DetailPanel,
}

impl Console {
    /// Wire a session from the seed collection
    pub fn new(
        config: AppConfig,
        assets: Vec<models::Asset>,
        notifier: Rc<dyn services::notify::Notifier>,
    ) -> AppResult<Self> {
        let mut store = AssetStore::new(assets)?;
        store.subscribe(|event| tracing::trace!(?event, "store changed"));
        Ok(Self {
            config,
            store,
            services: services::Services::new(notifier),
            renderer: map::MapRenderer::new(),
            sidebar: ui::Sidebar::new(),
            detail: ui::DetailPanel::new(),
        })
    }
}
