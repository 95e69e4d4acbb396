//! Trait seam over the upstream registry

#[cfg(test)]
use mockall::automock;

use crate::registry::error::FetchError;
use crate::registry::types::PackageRecord;

/// Trait for looking up package metadata from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MetadataSource: Send + Sync {
    /// Fetches the metadata record for one (package, tag) pair
    ///
    /// # Arguments
    /// * `name` - Canonical package name (e.g. `"@ng-select/ng-select"`)
    /// * `tag` - Version or dist-tag (e.g. `"8.3.0"`, `"latest"`)
    async fn lookup(&self, name: &str, tag: &str) -> Result<PackageRecord, FetchError>;
}
