//! Workflow services for the console

pub mod assets;
pub mod inventory;
pub mod maintenance;
pub mod notify;

use std::rc::Rc;

use notify::Notifier;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub assets: assets::AssetsService,
    pub maintenance: maintenance::MaintenanceService,
    pub inventory: inventory::InventoryService,
}

impl Services {
    /// Create all services sharing the given notifier
    pub fn new(notifier: Rc<dyn Notifier>) -> Self {
        Self {
            assets: assets::AssetsService::new(Rc::clone(&notifier)),
            maintenance: maintenance::MaintenanceService::new(Rc::clone(&notifier)),
            inventory: inventory::InventoryService::new(notifier),
        }
    }
}
