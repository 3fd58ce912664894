//! Authentication Module
//!
//! User registration, login, bearer-token authorization and credential
//! changes.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs           - Module exports and documentation
//! ├── users.rs         - Identity record and the CredentialStore trait
//! ├── pg_store.rs      - PostgreSQL credential store
//! ├── memory_store.rs  - In-memory credential store
//! ├── passwords.rs     - bcrypt hashing
//! ├── sessions.rs      - JWT issuance and verification
//! ├── service.rs       - AuthService: register, login, authorize, settings
//! └── handlers/        - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username, email, password → identity created (no token)
//! 2. **Login**: email, password → credentials verified → 1-hour JWT
//! 3. **Protected calls**: `Authorization: Bearer <token>` → verified → handler
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless; logout only discards the token client-side
//! - Unknown email and wrong password look identical to clients

/// User data model and store contract
pub mod users;

/// PostgreSQL-backed credential store
pub mod pg_store;

/// In-memory credential store
pub mod memory_store;

/// Password hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// Auth service
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use memory_store::MemoryCredentialStore;
pub use pg_store::PgCredentialStore;
pub use service::{AuthService, CredentialChange, Session};
pub use users::{CredentialStore, StoreError, User, UserPatch};
