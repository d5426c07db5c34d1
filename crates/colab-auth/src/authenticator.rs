//! The `Authenticator` seam and the bundled signed-session implementation.
//!
//! Token layout: `base64url(claims JSON) "." base64url(HMAC-SHA256(secret, first part))`,
//! both parts unpadded.

use std::future::Future;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, TimeDelta, Utc};
use colab_config::AuthConfig;
use colab_core::identity::AuthIdentity;
use colab_core::ids::{UserId, is_authenticated};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::claims::SessionClaims;
use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// Turns a presented credential into the caller's identity.
pub trait Authenticator: Send + Sync {
    /// # Errors
    ///
    /// `NotAuthenticated` for an empty token, `InvalidCredentials` for a token
    /// that cannot be trusted, `TokenExpired` once its lifetime has passed.
    fn authenticate(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<AuthIdentity, AuthError>> + Send;
}

/// Issues and verifies HMAC-signed session tokens.
#[derive(Clone)]
pub struct SessionTokenAuthenticator {
    secret: Vec<u8>,
    ttl: TimeDelta,
}

impl std::fmt::Debug for SessionTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenAuthenticator")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl SessionTokenAuthenticator {
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>, ttl: TimeDelta) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    /// Build from the `[auth]` config section.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Misconfigured` when the section fails validation.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        config
            .validate()
            .map_err(|e| AuthError::Misconfigured(e.to_string()))?;
        Ok(Self::new(
            config.token_secret.as_bytes(),
            TimeDelta::seconds(config.token_ttl_secs),
        ))
    }

    #[must_use]
    pub const fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Issue a token for `user_id` valid from now for the configured TTL.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an anonymous `user_id`.
    pub fn issue(&self, user_id: UserId, email: &str) -> Result<(String, SessionClaims), AuthError> {
        self.issue_at(user_id, email, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::issue`].
    pub fn issue_at(
        &self,
        user_id: UserId,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<(String, SessionClaims), AuthError> {
        if !is_authenticated(user_id) {
            return Err(AuthError::InvalidCredentials(
                "cannot issue a token for an anonymous caller".into(),
            ));
        }
        let claims = SessionClaims {
            user_id,
            email: email.to_string(),
            issued_at: now,
            expires_at: now + self.ttl,
        };
        let payload = serde_json::to_vec(&claims)
            .map_err(|e| AuthError::InvalidCredentials(format!("encode claims: {e}")))?;
        let payload = URL_SAFE_NO_PAD.encode(payload);
        let signature = URL_SAFE_NO_PAD.encode(self.sign(payload.as_bytes())?);

        tracing::debug!(user_id, expires_at = %claims.expires_at, "issued session token");
        Ok((format!("{payload}.{signature}"), claims))
    }

    /// Check signature and expiry, returning the decoded claims.
    ///
    /// # Errors
    ///
    /// See [`Authenticator::authenticate`].
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify as if the current time were `now`.
    ///
    /// # Errors
    ///
    /// See [`Authenticator::authenticate`].
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, AuthError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::NotAuthenticated);
        }
        let malformed = || AuthError::InvalidCredentials("malformed token".into());

        let (payload, signature) = token.split_once('.').ok_or_else(malformed)?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| malformed())?;

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        if mac.verify_slice(&signature).is_err() {
            tracing::debug!("session token signature mismatch");
            return Err(AuthError::InvalidCredentials("bad signature".into()));
        }

        let bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|_| malformed())?;
        let claims: SessionClaims = serde_json::from_slice(&bytes).map_err(|_| malformed())?;
        if !is_authenticated(claims.user_id) {
            return Err(malformed());
        }
        if claims.is_expired_at(now) {
            return Err(AuthError::TokenExpired);
        }
        Ok(claims)
    }

    fn mac(&self) -> Result<HmacSha256, AuthError> {
        HmacSha256::new_from_slice(&self.secret).map_err(|e| AuthError::Misconfigured(e.to_string()))
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, AuthError> {
        let mut mac = self.mac()?;
        mac.update(payload);
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

impl Authenticator for SessionTokenAuthenticator {
    async fn authenticate(&self, token: &str) -> Result<AuthIdentity, AuthError> {
        self.verify(token).map(|claims| claims.to_identity())
    }
}
