//! Shared server state

use crate::cache::PackageCache;

/// State handed to every request handler: the snapshot cache owning the
/// metadata source and the configured package list.
pub struct AppState {
    pub cache: PackageCache,
}

impl AppState {
    pub fn new(cache: PackageCache) -> Self {
        Self { cache }
    }
}
