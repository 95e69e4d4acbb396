use std::env;

// =============================================================================
// Watched packages
// =============================================================================

/// Identifiers watched by the dashboard, in display order
pub const PACKAGES: &[&str] = &[
    "expr-eval/latest",
    "@ng-select/ng-select/8.3.0",
    "sweetalert2/11.10.1",
];

// =============================================================================
// Cache and server
// =============================================================================

/// Freshness window for the package snapshot (24 hours)
pub const CACHE_TTL_HOURS: i64 = 24;

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;

/// Returns the bearer token for registry lookups, if one is configured
/// via `NPM_TOKEN`. The public npm registry works without one.
pub fn registry_token() -> Option<String> {
    token_from(env::var("NPM_TOKEN").ok())
}

fn token_from(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.trim().is_empty())
}
