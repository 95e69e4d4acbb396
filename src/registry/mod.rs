//! Registry lookup layer
//!
//! # Modules
//!
//! - [`spec`]: raw identifier parsing (canonical name + tag)
//! - [`source`]: the `MetadataSource` trait the cache depends on
//! - [`client`]: npm registry HTTP client
//! - [`types`]: shared value types
//! - [`error`]: lookup error taxonomy

pub mod client;
pub mod error;
pub mod source;
pub mod spec;
pub mod types;
