//! Application state for the web layer.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state.
///
/// Read-only: every request validates and resolves on its own local data.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
