/**
 * Session Tokens
 *
 * This module issues and verifies the signed bearer tokens handed out at
 * login. A token carries the identity id in `sub`, its issuance time in `iat`
 * and a fixed expiry one hour later in `exp`. Verification needs only the
 * signing secret; there is no server-side session table, so a token stays
 * valid until `exp` even after the client discards it.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::error::BackendError;

/// Lifetime of every session token
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signs and verifies session tokens with a server-held HMAC secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// Create an issuer from the signing secret
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl: Duration::seconds(TOKEN_TTL_SECS),
        }
    }

    /// Issue a token for `user_id` valid for one hour from now
    pub fn issue(&self, user_id: Uuid) -> Result<String, BackendError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    pub fn issue_at(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<String, BackendError> {
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            BackendError::internal(format!("token signing failed: {e}"))
        })
    }

    /// Verify a token against the current time and return its identity id
    pub fn verify(&self, token: &str) -> Result<Uuid, BackendError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`.
    ///
    /// The token is valid while `now < exp`; there is no leeway.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid, BackendError> {
        // Expiry is checked below against `now` so it can be tested
        // deterministically.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let claims = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| {
                tracing::warn!("Invalid token: {:?}", e.kind());
                BackendError::InvalidOrExpiredToken
            })?
            .claims;

        if now.timestamp() >= claims.exp {
            tracing::warn!("Expired token for user {}", claims.sub);
            return Err(BackendError::InvalidOrExpiredToken);
        }

        Uuid::parse_str(&claims.sub).map_err(|e| {
            tracing::warn!("Invalid user ID in token: {:?}", e);
            BackendError::InvalidOrExpiredToken
        })
    }
}

/// Extract the bearer token from an `Authorization` header value.
///
/// An absent header, or a `Bearer` scheme with nothing after it, is a
/// missing token. Any other scheme is rejected as an invalid token.
pub fn bearer_token(header: Option<&str>) -> Result<&str, BackendError> {
    let header = header.map(str::trim).filter(|h| !h.is_empty()).ok_or_else(|| {
        tracing::warn!("Missing Authorization header");
        BackendError::MissingToken
    })?;

    let (scheme, token) = header.split_once(' ').unwrap_or((header, ""));
    if !scheme.eq_ignore_ascii_case("bearer") {
        tracing::warn!("Invalid Authorization header format");
        return Err(BackendError::InvalidOrExpiredToken);
    }

    let token = token.trim();
    if token.is_empty() {
        tracing::warn!("Authorization header carries no token");
        return Err(BackendError::MissingToken);
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(b"test-secret")
    }

    #[test]
    fn test_issue_and_verify() {
        let user_id = Uuid::new_v4();
        let token = issuer().issue(user_id).unwrap();
        assert!(!token.is_empty());
        assert_eq!(issuer().verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_claims_carry_one_hour_expiry() {
        let user_id = Uuid::new_v4();
        let token = issuer().issue(user_id).unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        let claims = decode::<Claims>(&token, &DecodingKey::from_secret(b"test-secret"), &validation)
            .unwrap()
            .claims;
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_expiry_boundary() {
        let user_id = Uuid::new_v4();
        let issued = Utc::now();
        let token = issuer().issue_at(user_id, issued).unwrap();

        let at_59 = issued + Duration::minutes(59);
        let at_60 = issued + Duration::minutes(60);
        let at_61 = issued + Duration::minutes(61);
        assert_eq!(issuer().verify_at(&token, at_59).unwrap(), user_id);
        assert!(matches!(
            issuer().verify_at(&token, at_60),
            Err(BackendError::InvalidOrExpiredToken)
        ));
        assert!(matches!(
            issuer().verify_at(&token, at_61),
            Err(BackendError::InvalidOrExpiredToken)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issuer().issue(Uuid::new_v4()).unwrap();
        let other = TokenIssuer::new(b"another-secret");
        assert!(matches!(other.verify(&token), Err(BackendError::InvalidOrExpiredToken)));
    }

    #[test]
    fn test_verify_invalid_token() {
        assert!(matches!(
            issuer().verify("invalid.token.here"),
            Err(BackendError::InvalidOrExpiredToken)
        ));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = issuer().issue(Uuid::new_v4()).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_payload = issuer().issue(Uuid::new_v4()).unwrap();
        let forged: Vec<&str> = forged_payload.split('.').collect();
        parts[1] = forged[1];
        let tampered = parts.join(".");
        assert!(issuer().verify(&tampered).is_err());
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token(Some("Bearer abc.def")).unwrap(), "abc.def");
        assert_eq!(bearer_token(Some("bearer abc")).unwrap(), "abc");
        assert!(matches!(bearer_token(None), Err(BackendError::MissingToken)));
        assert!(matches!(bearer_token(Some("")), Err(BackendError::MissingToken)));
        assert!(matches!(bearer_token(Some("Bearer")), Err(BackendError::MissingToken)));
        assert!(matches!(bearer_token(Some("Bearer   ")), Err(BackendError::MissingToken)));
        assert!(matches!(
            bearer_token(Some("Basic dXNlcjpwYXNz")),
            Err(BackendError::InvalidOrExpiredToken)
        ));
    }
}
