//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - the bearer-token gate for protected routes

pub mod auth;

pub use auth::AuthUser;
