//! Application state for the web layer.

use std::sync::Arc;

use crate::bencina::BencinaClient;
use crate::finder::FinderConfig;

/// Shared application state.
///
/// Holds no per-request data; every search builds its own working set.
#[derive(Clone)]
pub struct AppState {
    /// Bencina API client
    pub bencina: Arc<BencinaClient>,

    /// Station finder configuration
    pub config: Arc<FinderConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(bencina: BencinaClient, config: FinderConfig) -> Self {
        Self {
            bencina: Arc::new(bencina),
            config: Arc::new(config),
        }
    }
}
