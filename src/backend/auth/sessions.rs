/**
 * Session Management
 *
 * A successful login produces a `Principal` that travels to the browser as a
 * signed JWT in an HttpOnly cookie. Expiry is checked by the caller-supplied
 * clock at the request boundary, not by the token library, and logout adds
 * the session id to a revocation list so the token dies before it expires.
 */

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "quoteshufl_session";

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username
    pub sub: String,
    /// Session id, used for revocation
    pub jti: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// The authenticated identity attached to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub session_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Principal {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Why a session token was not accepted
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("invalid session token: {0}")]
    Invalid(String),
    #[error("session expired")]
    Expired,
    #[error("session revoked")]
    Revoked,
}

/// Issues, checks and revokes session tokens
///
/// Cloning shares the revocation list.
#[derive(Clone)]
pub struct SessionManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: chrono::Duration,
    /// Revoked session id -> expiry of the revoked token
    revoked: Arc<RwLock<HashMap<Uuid, DateTime<Utc>>>>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    pub fn new(secret: &str, ttl: Duration) -> Result<Self, SessionError> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|_| SessionError::Invalid(format!("session lifetime out of range: {:?}", ttl)))?;
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
            revoked: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    pub fn ttl(&self) -> chrono::Duration {
        self.ttl
    }

    /// Start a session for `username` at `now`
    ///
    /// # Returns
    /// The signed token and the principal it encodes
    pub fn issue(&self, username: &str, now: DateTime<Utc>) -> Result<(String, Principal), SessionError> {
        // Second precision, matching what survives the round trip through the token.
        let issued_at = DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now);
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| SessionError::Invalid("expiry out of range".to_string()))?;
        let principal = Principal {
            username: username.to_string(),
            session_id: Uuid::new_v4(),
            issued_at,
            expires_at,
        };

        let claims = Claims {
            sub: principal.username.clone(),
            jti: principal.session_id.to_string(),
            iat: principal.issued_at.timestamp(),
            exp: principal.expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| SessionError::Invalid(e.to_string()))?;

        Ok((token, principal))
    }

    /// Verify a token and check it against `now` and the revocation list
    pub async fn authenticate(&self, token: &str, now: DateTime<Utc>) -> Result<Principal, SessionError> {
        let principal = self.decode(token)?;

        if principal.is_expired_at(now) {
            return Err(SessionError::Expired);
        }
        if self.revoked.read().await.contains_key(&principal.session_id) {
            return Err(SessionError::Revoked);
        }

        Ok(principal)
    }

    /// Decode without checking expiry or revocation
    pub fn decode(&self, token: &str) -> Result<Principal, SessionError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let claims = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| SessionError::Invalid(e.to_string()))?
            .claims;

        let session_id = Uuid::parse_str(&claims.jti)
            .map_err(|e| SessionError::Invalid(format!("bad session id: {}", e)))?;
        let issued_at = DateTime::from_timestamp(claims.iat, 0)
            .ok_or_else(|| SessionError::Invalid("bad iat".to_string()))?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| SessionError::Invalid("bad exp".to_string()))?;

        Ok(Principal {
            username: claims.sub,
            session_id,
            issued_at,
            expires_at,
        })
    }

    /// Invalidate a session regardless of its remaining lifetime
    pub async fn revoke(&self, principal: &Principal) {
        self.revoked
            .write()
            .await
            .insert(principal.session_id, principal.expires_at);
        tracing::debug!(session_id = %principal.session_id, "session revoked");
    }

    /// Forget revocations whose tokens have expired anyway
    ///
    /// # Returns
    /// Number of entries removed
    pub async fn prune_revoked(&self, now: DateTime<Utc>) -> usize {
        let mut revoked = self.revoked.write().await;
        let before = revoked.len();
        revoked.retain(|_, expires_at| *expires_at > now);
        before - revoked.len()
    }

    pub async fn revoked_count(&self) -> usize {
        self.revoked.read().await.len()
    }
}

/// Cookie that carries a session token
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie value that clears the session cookie when removed from a jar
pub fn session_cookie_removal() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn manager() -> SessionManager {
        SessionManager::new("test-secret", Duration::from_secs(300)).unwrap()
    }

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[tokio::test]
    async fn test_issue_and_authenticate() {
        let sessions = manager();
        let (token, principal) = sessions.issue("admin", at(1_000)).unwrap();
        assert!(!token.is_empty());
        assert_eq!(principal.expires_at, at(1_300));

        let authenticated = sessions.authenticate(&token, at(1_299)).await.unwrap();
        assert_eq!(authenticated, principal);
    }

    #[tokio::test]
    async fn test_expires_after_ttl() {
        let sessions = manager();
        let (token, _) = sessions.issue("admin", at(1_000)).unwrap();

        let result = sessions.authenticate(&token, at(1_300)).await;
        assert_eq!(result.unwrap_err(), SessionError::Expired);
    }

    #[tokio::test]
    async fn test_revoked_before_expiry() {
        let sessions = manager();
        let (token, principal) = sessions.issue("admin", at(1_000)).unwrap();
        sessions.revoke(&principal).await;

        let result = sessions.authenticate(&token, at(1_001)).await;
        assert_eq!(result.unwrap_err(), SessionError::Revoked);
    }

    #[tokio::test]
    async fn test_revocation_is_per_session() {
        let sessions = manager();
        let (_, first) = sessions.issue("admin", at(1_000)).unwrap();
        let (second_token, _) = sessions.issue("admin", at(1_000)).unwrap();
        sessions.revoke(&first).await;

        assert!(sessions.authenticate(&second_token, at(1_010)).await.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_secret_rejected() {
        let (token, _) = manager().issue("admin", at(1_000)).unwrap();
        let other = SessionManager::new("other-secret", Duration::from_secs(300)).unwrap();

        assert_matches!(other.authenticate(&token, at(1_001)).await, Err(SessionError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let result = manager().authenticate("invalid.token.here", at(1_000)).await;
        assert_matches!(result, Err(SessionError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_prune_revoked() {
        let sessions = manager();
        let (_, early) = sessions.issue("a", at(1_000)).unwrap();
        let (_, late) = sessions.issue("b", at(2_000)).unwrap();
        sessions.revoke(&early).await;
        sessions.revoke(&late).await;

        assert_eq!(sessions.prune_revoked(at(1_500)).await, 1);
        assert_eq!(sessions.revoked_count().await, 1);
    }

    #[test]
    fn test_unrepresentable_ttl_rejected() {
        let result = SessionManager::new("test-secret", Duration::from_secs(u64::MAX));
        assert_matches!(result, Err(SessionError::Invalid(_)));
    }

    #[test]
    fn test_expiry_overflow_is_an_error() {
        // Representable as a duration, but past chrono's last date once added
        let sessions = SessionManager::new("test-secret", Duration::from_secs(1_000_000_000_000_000)).unwrap();
        let result = sessions.issue("admin", Utc::now());
        assert_matches!(result, Err(SessionError::Invalid(_)));
    }

    #[test]
    fn test_session_cookie_flags() {
        let cookie = session_cookie("abc".to_string());
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }
}
