/**
 * Login Handler
 *
 * POST /api/login
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 400 response
 * - Password verification goes through bcrypt, never string comparison
 * - The issued token expires one hour after issuance
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - missing field, or "Invalid email or password"
/// * `503 Service Unavailable` - credential store failure
///
/// # Example Response
///
/// ```json
/// {
///   "message": "Login successful",
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(auth): State<AuthService>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, BackendError> {
    let session = auth
        .login(&request.email, &request.password)
        .await
        .map_err(BackendError::into_login_failure)?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: session.token,
    }))
}
