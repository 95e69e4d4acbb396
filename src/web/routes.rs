//! Route configuration

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::web::handlers;
use crate::web::state::AppState;

/// Creates the router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Dashboard page
        .route("/", get(handlers::index))
        // Snapshot as JSON
        .route("/api/packages", get(handlers::list_packages))
        // Manual refresh trigger
        .route("/refresh", get(handlers::refresh))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::PackageCache;
    use crate::registry::source::MockMetadataSource;
    use crate::registry::types::PackageRecord;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Duration;
    use tower::ServiceExt;

    fn test_app(source: MockMetadataSource) -> Router {
        let cache = PackageCache::new(
            Box::new(source),
            vec!["expr-eval/latest".to_string()],
            Duration::hours(24),
        );
        create_router(Arc::new(AppState::new(cache)))
    }

    fn stub_source(times: usize) -> MockMetadataSource {
        let mut source = MockMetadataSource::new();
        source.expect_lookup().times(times).returning(|name, _| {
            Ok(PackageRecord {
                name: name.to_string(),
                version: "2.0.2".to_string(),
                author: "Matthew Crumley".to_string(),
            })
        });
        source
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn index_renders_package_table() {
        let app = test_app(stub_source(1));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("expr-eval"));
        assert!(body.contains("2.0.2"));
        assert!(body.contains("updated just now"));
    }

    #[tokio::test]
    async fn list_packages_returns_snapshot_as_json() {
        let app = test_app(stub_source(1));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/packages")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        let packages: Vec<PackageRecord> = serde_json::from_str(&body).unwrap();
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name, "expr-eval");
    }

    #[tokio::test]
    async fn refresh_acknowledges_and_fetches() {
        let app = test_app(stub_source(1));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/refresh")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "Cache refreshed");
    }
}
