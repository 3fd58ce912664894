/**
 * User Model and Credential Store
 *
 * This module defines the identity record, the patch applied by settings
 * updates and the `CredentialStore` contract that every storage backend
 * implements.
 *
 * # Invariants
 *
 * - At most one identity per email. Backends enforce this at the point of
 *   write, never with a separate read-then-insert.
 * - `id` is assigned on creation and never changes.
 * - An `update` either applies the whole patch or nothing.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// User struct representing an identity record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID v4)
    pub id: Uuid,
    /// Display name
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Reference to the stored profile picture, if one was uploaded
    pub profile_picture_ref: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Set of field changes applied by `CredentialStore::update`
///
/// `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub profile_picture_ref: Option<String>,
}

impl UserPatch {
    /// True when the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.profile_picture_ref.is_none()
    }

    pub(crate) fn apply(&self, user: &mut User) {
        if let Some(username) = &self.username {
            user.username = username.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(password_hash) = &self.password_hash {
            user.password_hash = password_hash.clone();
        }
        if let Some(reference) = &self.profile_picture_ref {
            user.profile_picture_ref = Some(reference.clone());
        }
    }
}

/// Failures reported by credential store backends
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The email belongs to a different identity
    #[error("email already registered")]
    DuplicateEmail,
    /// No identity with the requested id
    #[error("user not found")]
    NotFound,
    /// The backend failed; the operation was not applied
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence contract for identity records
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert a new identity, failing with `DuplicateEmail` if the email exists.
    async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError>;

    /// Look up an identity by its exact email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Look up an identity by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Apply `patch` to the identity atomically.
    async fn update(&self, id: Uuid, patch: &UserPatch) -> Result<User, StoreError>;
}
