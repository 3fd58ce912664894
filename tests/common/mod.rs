//! Common test utilities and helpers
//!
//! Builds the full router over an in-memory credential store and a
//! temporary upload directory, plus helpers for the signup/login dance.

#![allow(dead_code)]

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use fintrack::backend::auth::passwords::PasswordHasher;
use fintrack::backend::auth::sessions::TokenIssuer;
use fintrack::backend::auth::{AuthService, MemoryCredentialStore};
use fintrack::backend::routes::create_router;
use fintrack::backend::server::state::AppState;
use fintrack::backend::uploads::DiskPictureStorage;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Signing secret shared by every test server
pub const TEST_SECRET: &[u8] = b"integration-test-secret";

/// A running test server and the handles behind it
pub struct TestApp {
    pub server: TestServer,
    pub auth: AuthService,
    pub store: MemoryCredentialStore,
    /// Kept alive for the duration of the test
    pub upload_dir: TempDir,
}

/// Build a test app with an empty in-memory store
pub fn test_app() -> TestApp {
    let store = MemoryCredentialStore::new();
    let auth = AuthService::new(
        Arc::new(store.clone()),
        TokenIssuer::new(TEST_SECRET),
        PasswordHasher::new(4),
    );
    let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");
    let pictures = Arc::new(DiskPictureStorage::new(upload_dir.path()));
    let state = AppState::new(auth.clone(), pictures, upload_dir.path().to_path_buf());

    let server = TestServer::new(create_router(state)).expect("Failed to start test server");
    TestApp {
        server,
        auth,
        store,
        upload_dir,
    }
}

/// POST /api/signup
pub async fn signup(server: &TestServer, username: &str, email: &str, password: &str) -> TestResponse {
    server
        .post("/api/signup")
        .json(&json!({
            "username": username,
            "email": email,
            "password": password
        }))
        .await
}

/// POST /api/login
pub async fn login(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/api/login")
        .json(&json!({ "email": email, "password": password }))
        .await
}

/// Register and log in, returning the bearer token
pub async fn registered_token(server: &TestServer, username: &str, email: &str, password: &str) -> String {
    assert_eq!(signup(server, username, email, password).await.status_code(), StatusCode::CREATED);
    let response = login(server, email, password).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    body["token"].as_str().expect("token missing").to_string()
}

/// Assert an error response's status and JSON body
pub fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
    assert_eq!(response.status_code(), status);
    let body: Value = response.json();
    assert_eq!(body["error"], message);
    assert_eq!(body["status"], status.as_u16());
}
