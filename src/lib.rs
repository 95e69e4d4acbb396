//! pkgspy: a small web server that shows npm package metadata for a fixed
//! dependency list, backed by an in-memory snapshot cache with a 24-hour
//! freshness window.
//!
//! # Modules
//!
//! - [`registry`]: identifier parsing and the npm metadata client
//! - [`fetch`]: concurrent snapshot assembly for the configured list
//! - [`cache`]: shared snapshot cache with freshness tracking
//! - [`web`]: axum routes, handlers, and HTML rendering
//! - [`config`]: startup constants and environment lookups

pub mod cache;
pub mod config;
pub mod fetch;
pub mod registry;
pub mod web;
