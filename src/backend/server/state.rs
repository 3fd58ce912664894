/**
 * Application State Management
 *
 * `AppState` is built once at startup and cloned into every request. It
 * holds the auth service (which owns the credential store handle and the
 * signing key) and the picture storage collaborator. Nothing in it is a
 * global; tests build their own with an in-memory store.
 */

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::service::AuthService;
use crate::backend::uploads::PictureStorage;

/// Shared state for all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Registration, login and the bearer-token gate
    pub auth: AuthService,

    /// Where uploaded profile pictures go
    pub pictures: Arc<dyn PictureStorage>,

    /// Directory served under `/uploads`
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn new(auth: AuthService, pictures: Arc<dyn PictureStorage>, upload_dir: PathBuf) -> Self {
        Self {
            auth,
            pictures,
            upload_dir,
        }
    }
}

/// Lets handlers extract `State<AuthService>` directly
impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
