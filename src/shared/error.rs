//! Shared Error Types
//!
//! Errors describing client input that cannot be accepted. They carry the
//! offending field name so clients can point at the right form input.
//!
//! # Usage
//!
//! ```rust
//! use fintrack::shared::error::SharedError;
//!
//! let error = SharedError::missing("email");
//! assert_eq!(error.to_string(), "Field 'email' is required");
//! ```
use thiserror::Error;

/// Input errors shared between the server and its clients
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A required field was absent or blank
    #[error("Field '{field}' is required")]
    MissingField {
        /// The field that was missing
        field: String,
    },

    /// A field was present but its value is unusable
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new missing-field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field() {
        let error = SharedError::missing("username");
        match &error {
            SharedError::MissingField { field } => assert_eq!(field, "username"),
            _ => panic!("Expected MissingField"),
        }
        assert_eq!(error.to_string(), "Field 'username' is required");
    }

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("email", "Invalid email format");
        match &error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "email");
                assert_eq!(message, "Invalid email format");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_error_display() {
        let error = SharedError::validation("password", "too weak");
        let display = format!("{}", error);
        assert!(display.contains("password"));
        assert!(display.contains("too weak"));
    }
}
