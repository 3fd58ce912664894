/**
 * Authentication Gate
 *
 * `AuthUser` is an extractor that runs `AuthService::authorize` on the
 * request's `Authorization` header. Any handler that takes an `AuthUser`
 * parameter cannot run without a valid, unexpired bearer token, and because
 * it only reads request parts it is resolved before the body is consumed.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Identity of the caller, taken from a verified bearer token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AuthService: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthService::from_ref(state);

        let header = match parts.headers.get(AUTHORIZATION) {
            Some(value) => Some(value.to_str().map_err(|_| {
                tracing::warn!("Authorization header is not valid ASCII");
                BackendError::InvalidOrExpiredToken
            })?),
            None => None,
        };

        let user_id = auth.authorize(header)?;
        Ok(AuthUser { user_id })
    }
}
