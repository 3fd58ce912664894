//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used by the store, the auth service and the HTTP
//! handlers, and can be converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{BackendError, LOGIN_FAILED_MESSAGE};
