/**
 * Password Hashing
 *
 * bcrypt with a per-hash random salt. Both hashing and verification are
 * deliberately slow, so they run on tokio's blocking pool.
 *
 * bcrypt only reads the first 72 bytes of its input. Longer passwords are
 * rejected at hashing time instead of being silently truncated, so no two
 * distinct accepted passwords can share a hash.
 */

use bcrypt::BcryptError;

use crate::backend::error::BackendError;
use crate::shared::SharedError;

/// Cost used when none is configured
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Longest password bcrypt hashes without truncation
pub const MAX_PASSWORD_BYTES: usize = 72;

fn too_long() -> BackendError {
    SharedError::validation(
        "password",
        format!("must be at most {MAX_PASSWORD_BYTES} bytes"),
    )
    .into()
}

/// bcrypt hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password
    ///
    /// Passwords longer than `MAX_PASSWORD_BYTES` fail with a validation
    /// error.
    pub async fn hash(&self, password: &str) -> Result<String, BackendError> {
        let password = password.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::non_truncating_hash(password, cost))
            .await
            .map_err(|e| BackendError::internal(format!("hashing task failed: {e}")))?
            .map_err(|e| match e {
                BcryptError::Truncation(_) => too_long(),
                e => {
                    tracing::error!("Failed to hash password: {:?}", e);
                    BackendError::internal(format!("password hashing failed: {e}"))
                }
            })
    }

    /// Check a plaintext password against a stored hash
    ///
    /// An over-long password never matches: no stored hash can have come
    /// from it.
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, BackendError> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        let result =
            tokio::task::spawn_blocking(move || bcrypt::non_truncating_verify(password, &hash))
                .await
                .map_err(|e| BackendError::internal(format!("verification task failed: {e}")))?;
        match result {
            Ok(matches) => Ok(matches),
            Err(BcryptError::Truncation(_)) => Ok(false),
            Err(e) => {
                tracing::error!("Password verification error: {:?}", e);
                Err(BackendError::internal(format!("password verification failed: {e}")))
            }
        }
    }
}
