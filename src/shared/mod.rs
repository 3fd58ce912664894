//! Shared Module
//!
//! Types that are meaningful on both sides of the API: the validation error
//! raised for malformed client input and the presence checks that produce it.

/// Shared error types
pub mod error;

/// Minimal presence validation for request fields
pub mod validation;

pub use error::SharedError;
pub use validation::{non_empty, present, require};
