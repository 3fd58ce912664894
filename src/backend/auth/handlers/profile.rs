/**
 * Profile Handler
 *
 * GET /get-username returns the username and profile picture reference of
 * the caller identified by the bearer token.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::ProfileResponse;
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing, invalid or expired token
/// * `404 Not Found` - token is valid but the user no longer exists
pub async fn get_profile(
    State(auth): State<AuthService>,
    AuthUser { user_id }: AuthUser,
) -> Result<Json<ProfileResponse>, BackendError> {
    let user = auth.profile(user_id).await?;
    Ok(Json(ProfileResponse::from(user)))
}
