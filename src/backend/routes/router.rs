/**
 * Router Configuration
 *
 * Combines the API routes, static serving of uploaded pictures and the
 * JSON 404 fallback into a single Axum router.
 */

use axum::{http::StatusCode, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// 1. **API Routes**: signup, login and the authenticated profile endpoints
/// 2. **Uploads**: `/uploads/*` served from the configured upload directory
/// 3. **Fallback**: JSON 404 for unknown routes
///
/// Every request is traced, and CORS is open because the browser client is
/// served from a different origin.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    let router = router.nest_service("/uploads", ServeDir::new(&app_state.upload_dir));

    let router = router.fallback(|| async {
        BackendError::handler(StatusCode::NOT_FOUND, "Route not found")
    });

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::backend::auth::memory_store::MemoryCredentialStore;
    use crate::backend::auth::passwords::PasswordHasher;
    use crate::backend::auth::service::AuthService;
    use crate::backend::auth::sessions::TokenIssuer;
    use crate::backend::uploads::DiskPictureStorage;

    fn router(upload_dir: &std::path::Path) -> Router<()> {
        let auth = AuthService::new(
            Arc::new(MemoryCredentialStore::new()),
            TokenIssuer::new(b"router-test-secret"),
            PasswordHasher::new(4),
        );
        let pictures = Arc::new(DiskPictureStorage::new(upload_dir));
        create_router(AppState::new(auth, pictures, upload_dir.to_path_buf()))
    }

    #[tokio::test]
    async fn test_fallback_is_json_404() {
        let dir = tempfile::tempdir().unwrap();
        let response = router(dir.path())
            .oneshot(Request::get("/nowhere").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Route not found");
    }

    #[tokio::test]
    async fn test_serves_uploaded_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("1-me.png"), b"png").unwrap();

        let response = router(dir.path())
            .oneshot(Request::get("/uploads/1-me.png").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"png");
    }

    #[tokio::test]
    async fn test_protected_routes_reject_anonymous_requests() {
        let dir = tempfile::tempdir().unwrap();
        for (method, path) in [
            ("GET", "/get-username"),
            ("POST", "/upload-profile-pic"),
            ("PUT", "/api/update-settings"),
        ] {
            let request = Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap();
            let response = router(dir.path()).oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{method} {path}");
        }
    }
}
