use std::sync::Arc;
use crate::config::{BootstrapSettings, DatabaseConnections};
use crate::stores::ItemStore;

/// Centralized application data
///
/// Everything is created once in main.rs and shared with the API layer.
///
/// ```text
/// main.rs
///   ↓
/// DatabaseConnections::init() + migrate()
///   ↓
/// AppData::init()
///   └─ item_store (Arc<ItemStore>)
///   ↓
/// api::build_app(item_store)
/// ```
pub struct AppData {
    pub settings: BootstrapSettings,
    pub connections: DatabaseConnections,
    pub item_store: Arc<ItemStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// Database connections should be initialized and migrated before calling this.
    pub fn init(settings: BootstrapSettings, connections: DatabaseConnections) -> Self {
        tracing::debug!("Creating stores...");
        let item_store = Arc::new(ItemStore::new(connections.items.clone()));
        tracing::info!("AppData initialization complete");

        Self {
            settings,
            connections,
            item_store,
        }
    }
}
