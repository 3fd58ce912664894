/**
 * Auth Service
 *
 * Registration, login, token authorization and credential changes on top of
 * a `CredentialStore`. Handlers never touch the store or the hasher directly;
 * everything user-scoped goes through `authorize` first.
 *
 * # Guarantees
 *
 * - Plaintext passwords are hashed and dropped; they are never logged.
 * - `authorize` is a pure signature/expiry check and never reads the store.
 * - `change_credentials` validates every requested change before issuing a
 *   single store update, so a failing call writes nothing.
 */

use std::sync::Arc;

use axum::http::StatusCode;
use uuid::Uuid;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::{bearer_token, TokenIssuer};
use crate::backend::auth::users::{CredentialStore, User, UserPatch};
use crate::backend::error::BackendError;
use crate::shared::{non_empty, present, require, SharedError};

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct Session {
    /// Signed bearer token, valid for one hour
    pub token: String,
    /// The authenticated identity
    pub user: User,
}

/// Changes requested through the settings form
///
/// Blank strings count as "not requested".
#[derive(Debug, Clone, Default)]
pub struct CredentialChange {
    pub username: Option<String>,
    pub email: Option<String>,
    /// Current password, required when `new_password` is set
    pub current_password: Option<String>,
    pub new_password: Option<String>,
    pub confirm_password: Option<String>,
}

/// Authentication and authorization service
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    tokens: TokenIssuer,
    hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, tokens: TokenIssuer, hasher: PasswordHasher) -> Self {
        Self {
            store,
            tokens,
            hasher,
        }
    }

    /// The token issuer used for login and authorization
    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    /// Register a new identity.
    ///
    /// Fails with `DuplicateEmail` if the email is already registered; the
    /// store decides this atomically, so concurrent registrations of one
    /// email yield exactly one success.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, BackendError> {
        let username = require("username", username)?.trim();
        let email = require("email", email)?.trim();
        let password = require("password", password)?;

        let password_hash = self.hasher.hash(password).await?;
        let user = self
            .store
            .create(username, email, &password_hash)
            .await
            .map_err(|e| {
                tracing::warn!("Failed to create user {}: {}", email, e);
                BackendError::from(e)
            })?;

        tracing::info!("User created successfully: {} ({})", user.username, user.id);
        Ok(user)
    }

    /// Check credentials and issue a session token.
    ///
    /// Returns `NotFound` for an unknown email and `InvalidCredentials` for a
    /// wrong password. Callers facing clients should collapse the two with
    /// `BackendError::into_login_failure`.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        let email = require("email", email)?.trim();
        let password = require("password", password)?;

        let user = self.store.find_by_email(email).await?.ok_or_else(|| {
            tracing::warn!("Login for unknown email");
            BackendError::NotFound
        })?;

        if !self.hasher.verify(password, &user.password_hash).await? {
            tracing::warn!("Invalid password for user: {}", user.id);
            return Err(BackendError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id)?;
        tracing::info!("User logged in successfully: {}", user.id);
        Ok(Session { token, user })
    }

    /// Gate for protected operations.
    ///
    /// Takes the raw `Authorization` header value and returns the identity id
    /// embedded in a valid, unexpired bearer token.
    pub fn authorize(&self, authorization: Option<&str>) -> Result<Uuid, BackendError> {
        let token = bearer_token(authorization)?;
        self.tokens.verify(token)
    }

    /// Fetch the identity behind an authorized request
    pub async fn profile(&self, user_id: Uuid) -> Result<User, BackendError> {
        self.store.find_by_id(user_id).await?.ok_or_else(|| {
            tracing::warn!("User not found: {}", user_id);
            BackendError::NotFound
        })
    }

    /// Record the storage reference of a freshly uploaded profile picture
    pub async fn record_profile_picture(
        &self,
        user_id: Uuid,
        reference: &str,
    ) -> Result<User, BackendError> {
        let patch = UserPatch {
            profile_picture_ref: Some(reference.to_string()),
            ..Default::default()
        };
        let user = self.store.update(user_id, &patch).await?;
        tracing::info!("Profile picture updated for user {}", user_id);
        Ok(user)
    }

    /// Apply a settings change, all or nothing.
    ///
    /// - username: no precondition
    /// - email: must not belong to another identity
    /// - password: the current password must verify and the new password
    ///   must equal its confirmation byte for byte
    pub async fn change_credentials(
        &self,
        user_id: Uuid,
        change: &CredentialChange,
    ) -> Result<User, BackendError> {
        let user = self.profile(user_id).await?;
        let mut patch = UserPatch::default();

        if let Some(username) = non_empty(change.username.as_deref()) {
            patch.username = Some(username.to_string());
        }

        if let Some(email) = non_empty(change.email.as_deref()) {
            // Early, friendlier rejection; the store re-checks on write.
            if let Some(owner) = self.store.find_by_email(email).await? {
                if owner.id != user_id {
                    tracing::warn!("Email change for {} collides with another user", user_id);
                    return Err(BackendError::DuplicateEmail);
                }
            }
            patch.email = Some(email.to_string());
        }

        if let Some(new_password) = present(change.new_password.as_deref()) {
            let current = present(change.current_password.as_deref())
                .ok_or_else(|| SharedError::missing("password"))?;

            if !self.hasher.verify(current, &user.password_hash).await? {
                tracing::warn!("Incorrect current password for user: {}", user_id);
                return Err(BackendError::InvalidCredentials);
            }
            if change.confirm_password.as_deref() != Some(new_password) {
                return Err(BackendError::PasswordMismatch);
            }
            patch.password_hash = Some(self.hasher.hash(new_password).await?);
        }

        if patch.is_empty() {
            return Err(BackendError::handler(
                StatusCode::BAD_REQUEST,
                "No valid changes to update",
            ));
        }

        let updated = self.store.update(user_id, &patch).await?;
        tracing::info!("User settings updated for {}", user_id);
        Ok(updated)
    }
}
