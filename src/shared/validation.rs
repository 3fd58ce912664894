//! Presence checks for request fields.
//!
//! Blank strings are treated exactly like absent values: a settings form that
//! submits `"username": ""` means "leave the username alone".

use crate::shared::error::SharedError;

/// Returns the trimmed value when it has any content.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Returns the value untouched when it is not blank.
///
/// Used for passwords, which are compared and hashed byte-for-byte.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Requires a field to be present and non-blank.
///
/// Passwords are returned untrimmed; only the blank check uses the trimmed
/// form.
pub fn require<'a>(field: &str, value: &'a str) -> Result<&'a str, SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::missing(field));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("  alice ")), Some("alice"));
        assert_eq!(non_empty(Some("   ")), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_present_keeps_whitespace() {
        assert_eq!(present(Some(" secret ")), Some(" secret "));
        assert_eq!(present(Some("  ")), None);
        assert_eq!(present(None), None);
    }

    #[test]
    fn test_require() {
        assert_eq!(require("email", "a@b.c"), Ok("a@b.c"));
        assert_eq!(require("password", " secret "), Ok(" secret "));
        assert_eq!(require("email", " "), Err(SharedError::missing("email")));
    }
}
