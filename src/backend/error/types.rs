/**
 * Backend Error Types
 *
 * This module defines the errors produced by the credential store, the auth
 * service and the HTTP handlers. Every variant maps to exactly one HTTP
 * status code; none of them is retried by the server.
 *
 * # Error Categories
 *
 * ## Credential errors
 *
 * - `DuplicateEmail` - another identity already owns the email
 * - `NotFound` - no identity matches the lookup
 * - `InvalidCredentials` - password did not verify against the stored hash
 * - `PasswordMismatch` - new password and its confirmation differ
 * - `LoginFailed` - what clients see for either of the two login failures
 *
 * ## Token errors
 *
 * - `MissingToken` - no bearer token on a protected request
 * - `InvalidOrExpiredToken` - signature, format or expiry check failed
 *
 * ## Infrastructure errors
 *
 * - `StoreUnavailable` - the persistence layer failed
 * - `Internal` - hashing or token signing failed
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::users::StoreError;
use crate::shared::SharedError;

/// Public message for any failed login attempt.
///
/// Unknown emails and wrong passwords share it so the login endpoint cannot
/// be used to discover which emails are registered.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use fintrack::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "No file uploaded");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// An identity with this email already exists
    #[error("Email is already taken")]
    DuplicateEmail,

    /// The requested identity does not exist
    #[error("User not found")]
    NotFound,

    /// The supplied password does not match the stored hash
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Public form of a failed login, whatever the internal reason
    #[error("{}", LOGIN_FAILED_MESSAGE)]
    LoginFailed,

    /// No bearer token was supplied
    #[error("No token provided")]
    MissingToken,

    /// The bearer token is malformed, forged or expired
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    /// New password and confirmation differ
    #[error("New password and confirm password do not match")]
    PasswordMismatch,

    /// The credential store could not complete the operation
    #[error("Store unavailable: {message}")]
    StoreUnavailable {
        /// Underlying failure description (logged, not shown to clients)
        message: String,
    },

    /// Request input failed a presence or format check
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Handler error (e.g. missing multipart field)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Password hashing or token signing failed
    #[error("Internal error: {message}")]
    Internal {
        /// Underlying failure description (logged, not shown to clients)
        message: String,
    },
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Collapse login failures into the single public credential error.
    ///
    /// `NotFound` and `InvalidCredentials` both become `LoginFailed`; every
    /// other error passes through untouched.
    pub fn into_login_failure(self) -> Self {
        match self {
            Self::NotFound | Self::InvalidCredentials => Self::LoginFailed,
            other => other,
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `DuplicateEmail`, `InvalidCredentials`, `LoginFailed`,
    ///   `PasswordMismatch`, `Validation` - 400 Bad Request
    /// - `MissingToken`, `InvalidOrExpiredToken` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `StoreUnavailable` - 503 Service Unavailable
    /// - `Internal` - 500 Internal Server Error
    /// - `HandlerError` - uses the status code from the error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateEmail
            | Self::InvalidCredentials
            | Self::LoginFailed
            | Self::PasswordMismatch
            | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::MissingToken | Self::InvalidOrExpiredToken => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::HandlerError { status, .. } => *status,
        }
    }

    /// Get the message shown to clients
    ///
    /// Infrastructure failures get a generic message; their detail stays in
    /// the server log.
    pub fn message(&self) -> String {
        match self {
            Self::StoreUnavailable { .. } => "Service temporarily unavailable".to_string(),
            Self::Internal { .. } => "An error occurred".to_string(),
            Self::HandlerError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::DuplicateEmail,
            StoreError::NotFound => Self::NotFound,
            StoreError::Unavailable(message) => Self::StoreUnavailable { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error() {
        let error = BackendError::handler(StatusCode::BAD_REQUEST, "No file uploaded");
        match error {
            BackendError::HandlerError { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "No file uploaded");
            }
            _ => panic!("Expected HandlerError"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(BackendError::DuplicateEmail.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BackendError::InvalidCredentials.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BackendError::PasswordMismatch.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BackendError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            BackendError::InvalidOrExpiredToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(BackendError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            BackendError::from(StoreError::Unavailable("down".into())).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            BackendError::internal("bcrypt").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            BackendError::from(SharedError::missing("email")).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_login_failures_collapse() {
        let unknown = BackendError::NotFound.into_login_failure();
        let wrong = BackendError::InvalidCredentials.into_login_failure();
        assert!(matches!(unknown, BackendError::LoginFailed));
        assert_eq!(unknown.status_code(), wrong.status_code());
        assert_eq!(unknown.message(), wrong.message());
        assert_eq!(unknown.message(), LOGIN_FAILED_MESSAGE);

        let other = BackendError::from(StoreError::Unavailable("down".into())).into_login_failure();
        assert!(matches!(other, BackendError::StoreUnavailable { .. }));
    }

    #[test]
    fn test_infrastructure_detail_is_hidden() {
        let error = BackendError::from(StoreError::Unavailable("connection refused".into()));
        assert!(!error.message().contains("connection refused"));
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_from_store_error() {
        assert!(matches!(
            BackendError::from(StoreError::DuplicateEmail),
            BackendError::DuplicateEmail
        ));
        assert!(matches!(BackendError::from(StoreError::NotFound), BackendError::NotFound));
    }
}
