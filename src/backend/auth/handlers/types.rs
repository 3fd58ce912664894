/**
 * Authentication Handler Types
 *
 * Request and response bodies for the auth and profile endpoints. Field
 * names match what the web client sends (`newPassword`, `profilePic`, ...).
 * Missing string fields deserialize as empty so presence checks produce a
 * normal 400 instead of a body rejection.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::service::CredentialChange;
use crate::backend::auth::users::User;

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Settings update request
///
/// Every field is optional; blank fields are ignored.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    /// Current password, needed to set `new_password`
    pub password: Option<String>,
    pub new_password: Option<String>,
    pub confirm_password: Option<String>,
}

impl From<UpdateSettingsRequest> for CredentialChange {
    fn from(request: UpdateSettingsRequest) -> Self {
        CredentialChange {
            username: request.username,
            email: request.email,
            current_password: request.password,
            new_password: request.new_password,
            confirm_password: request.confirm_password,
        }
    }
}

/// Plain confirmation body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub message: String,
    /// Bearer token, valid for one hour
    pub token: String,
}

/// Profile of the authenticated user (no credentials)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub username: String,
    pub profile_pic: Option<String>,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            profile_pic: user.profile_picture_ref,
        }
    }
}

/// Profile picture upload response
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    /// Reference recorded against the user
    pub file_path: String,
}
