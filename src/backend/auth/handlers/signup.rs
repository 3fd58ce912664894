/**
 * Signup Handler
 *
 * POST /api/signup
 *
 * # Registration Process
 *
 * 1. Presence-check username, email and password
 * 2. Hash password using bcrypt
 * 3. Create the identity (the store rejects duplicate emails)
 * 4. Return 201 with a confirmation message
 *
 * No token is issued here; the client logs in afterwards.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{MessageResponse, SignupRequest};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - missing field or email already registered
/// * `503 Service Unavailable` - credential store failure
///
/// # Example Request
///
/// ```http
/// POST /api/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "password": "securepassword123"
/// }
/// ```
pub async fn signup(
    State(auth): State<AuthService>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    tracing::info!("Signup request for email: {}", request.email);

    auth.register(&request.username, &request.email, &request.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}
