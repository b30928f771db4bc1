use std::sync::Arc;

use devinterview_store::CatalogStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the catalog store is a shared handle and the config sits
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The owned in-memory catalog.
    pub store: CatalogStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: CatalogStore, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
