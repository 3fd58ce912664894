//! Server Module
//!
//! Server initialization, configuration and application state.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration and database loading
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **State Creation**: credential store, auth service, picture storage
//! 3. **Router Creation**: routes, static uploads, CORS and tracing layers

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, DatabaseError, ServerConfig};
pub use init::{create_app, StartupError};
pub use state::AppState;
