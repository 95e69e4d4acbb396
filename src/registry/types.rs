//! Common types for registry lookups

use serde::{Deserialize, Serialize};

/// Metadata for a single package as reported by the registry.
///
/// Produced only by a successful lookup; immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    /// Best-effort; empty when the registry reports no structured author
    pub author: String,
}
