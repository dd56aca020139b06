//! Configuration for the station finder.

use std::time::Duration;

/// Limits for the store-presence fallback.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// How many of the nearest stations get a detail lookup when no
    /// search result shows a store.
    pub store_detail_limit: usize,

    /// Maximum detail lookups in flight at once.
    pub store_concurrency: usize,

    /// Time allowed for each detail lookup.
    pub store_timeout: Duration,
}

impl FinderConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        store_detail_limit: usize,
        store_concurrency: usize,
        store_timeout: Duration,
    ) -> Self {
        Self {
            store_detail_limit,
            store_concurrency,
            store_timeout,
        }
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            store_detail_limit: 40,
            store_concurrency: 8,
            store_timeout: Duration::from_secs(15),
        }
    }
}
