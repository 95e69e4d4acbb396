//! HTTP surface: routing, handlers, shared state, and HTML rendering

pub mod handlers;
pub mod render;
pub mod routes;
pub mod state;

use std::sync::Arc;

use chrono::Duration;
use tracing::info;

use crate::cache::PackageCache;
use crate::config;
use crate::registry::client::{DEFAULT_BASE_URL, NpmClient};
use crate::web::state::AppState;

/// Builds the cache over the configured package list and serves the
/// dashboard until the process is stopped.
pub async fn run_server(port: u16) -> anyhow::Result<()> {
    let client = NpmClient::new(DEFAULT_BASE_URL, config::registry_token());
    let cache = PackageCache::new(
        Box::new(client),
        config::PACKAGES.iter().map(|s| s.to_string()).collect(),
        Duration::hours(config::CACHE_TTL_HOURS),
    );

    let state = Arc::new(AppState::new(cache));
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Server running on :{}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
