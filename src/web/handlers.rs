//! HTTP handlers for the dashboard page and the refresh trigger

use std::sync::Arc;

use axum::{Json, extract::State, response::Html};
use chrono::Utc;
use tracing::info;

use crate::registry::types::PackageRecord;
use crate::web::render;
use crate::web::state::AppState;

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let packages = state.cache.read().await;
    let updated = render::time_ago(state.cache.last_updated().await, Utc::now());
    Html(render::render_page(&packages, &updated))
}

/// GET /api/packages
pub async fn list_packages(State(state): State<Arc<AppState>>) -> Json<Vec<PackageRecord>> {
    Json(state.cache.read().await)
}

/// GET /refresh
pub async fn refresh(State(state): State<Arc<AppState>>) -> &'static str {
    let packages = state.cache.force_refresh().await;
    info!("Manual refresh cached {} packages", packages.len());
    "Cache refreshed"
}
