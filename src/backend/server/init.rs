/**
 * Server Initialization
 *
 * # Initialization Process
 *
 * 1. Connect the credential store (PostgreSQL when configured, else memory)
 * 2. Build the auth service from the store, signing secret and bcrypt cost
 * 3. Prepare the upload directory
 * 4. Create and configure the router
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::memory_store::MemoryCredentialStore;
use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::pg_store::PgCredentialStore;
use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::CredentialStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, DatabaseError, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::uploads::DiskPictureStorage;

/// Startup failures
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error("failed to prepare upload directory: {0}")]
    Uploads(#[from] std::io::Error),
}

/// Build the application state from configuration
pub async fn build_state(config: &ServerConfig) -> Result<AppState, StartupError> {
    let store: Arc<dyn CredentialStore> = match load_database(config).await? {
        Some(pool) => Arc::new(PgCredentialStore::new(pool)),
        None => Arc::new(MemoryCredentialStore::new()),
    };

    let auth = AuthService::new(
        store,
        TokenIssuer::new(config.jwt_secret.as_bytes()),
        PasswordHasher::new(config.bcrypt_cost),
    );

    let pictures = DiskPictureStorage::new(&config.upload_dir);
    pictures.ensure_dir().await?;
    tracing::info!("Profile pictures stored in {}", pictures.dir().display());

    Ok(AppState::new(auth, Arc::new(pictures), config.upload_dir.clone()))
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing fintrack backend server");
    let app_state = build_state(config).await?;
    let app = create_router(app_state);
    tracing::info!("Router configured");
    Ok(app)
}
