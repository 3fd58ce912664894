//! Backend Module
//!
//! All server-side code: the Axum HTTP server, the credential store, the
//! auth service and the bearer-token gate in front of the profile
//! endpoints.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Configuration, initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Credential store, auth service and handlers
//! ├── middleware/     - AuthUser extractor
//! ├── uploads.rs      - Profile picture storage
//! └── error/          - Error types and HTTP conversion
//! ```
//!
//! # State Management
//!
//! `AppState` holds the `AuthService` and the picture storage. Handlers
//! extract `State<AuthService>` or `State<AppState>`; nothing is global.
//!
//! # Error Handling
//!
//! Every handler returns `Result<_, BackendError>`. The error converts
//! itself into a JSON `{ "error", "status" }` body with the matching status
//! code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Profile picture storage
pub mod uploads;

pub use auth::AuthService;
pub use error::BackendError;
pub use middleware::AuthUser;
pub use server::create_app;
