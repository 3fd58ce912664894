/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/signup` - User registration
 * - `POST /api/login` - User login, returns a bearer token
 *
 * ## Authenticated (`Authorization: Bearer <token>`)
 * - `GET /get-username` - Current user's username and profile picture
 * - `POST /upload-profile-pic` - Multipart profile picture upload
 * - `PUT /api/update-settings` - Change username, email and/or password
 */

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::handlers::{
    get_profile, login, signup, update_settings, upload_profile_pic,
};
use crate::backend::server::state::AppState;

/// Largest accepted profile picture request body
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Configure API routes
///
/// Authenticated handlers extract `AuthUser`, so the token check happens per
/// handler rather than through a layer on this router.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/signup", post(signup))
        .route("/api/login", post(login))
        .route("/get-username", get(get_profile))
        .route(
            "/upload-profile-pic",
            post(upload_profile_pic).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/update-settings", put(update_settings))
}
