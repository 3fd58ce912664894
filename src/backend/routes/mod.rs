//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Auth and profile endpoints
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fintrack::backend::auth::{AuthService, MemoryCredentialStore};
//! use fintrack::backend::auth::passwords::PasswordHasher;
//! use fintrack::backend::auth::sessions::TokenIssuer;
//! use fintrack::backend::routes::create_router;
//! use fintrack::backend::server::state::AppState;
//! use fintrack::backend::uploads::DiskPictureStorage;
//!
//! let auth = AuthService::new(
//!     Arc::new(MemoryCredentialStore::new()),
//!     TokenIssuer::new(b"secret"),
//!     PasswordHasher::default(),
//! );
//! let pictures = Arc::new(DiskPictureStorage::new("uploads"));
//! let router = create_router(AppState::new(auth, pictures, "uploads".into()));
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
