//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::store::DatasetRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for dataset storage
    pub repository: Arc<dyn DatasetRepository>,
    /// Engine configuration (tuning and catalogs)
    pub config: Arc<EngineConfig>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(repository: Arc<dyn DatasetRepository>, config: Arc<EngineConfig>) -> Self {
        Self { repository, config }
    }
}
