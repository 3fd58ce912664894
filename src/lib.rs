//! Fintrack - Main Library
//!
//! Fintrack is the server side of a personal finance tracker. Users register,
//! log in, keep a profile (with a profile picture) and edit their account
//! settings. This crate implements the authentication and authorization core
//! those features sit on, plus the HTTP surface that exposes it.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared with API clients
//!   - Validation helpers and the shared error type
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and the bearer-token gate
//!   - Credential store (PostgreSQL or in-memory)
//!   - Auth service: bcrypt password hashing and JWT session tokens
//!   - Profile picture storage
//!
//! # Usage
//!
//! ```rust,no_run
//! use fintrack::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - Custom error types in `shared::error` and `backend::error`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
