use chrono::{DateTime, Utc};
use colab_core::identity::AuthIdentity;
use colab_core::ids::UserId;
use serde::{Deserialize, Serialize};

/// Claims carried inside a session token.
///
/// Serialized as JSON and signed; produced by
/// [`SessionTokenAuthenticator::issue`](crate::SessionTokenAuthenticator::issue).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(rename = "sub")]
    pub user_id: UserId,
    pub email: String,
    #[serde(rename = "iat", with = "chrono::serde::ts_seconds")]
    pub issued_at: DateTime<Utc>,
    #[serde(rename = "exp", with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    /// Convert to a lightweight `AuthIdentity` for cross-crate passing.
    #[must_use]
    pub fn to_identity(&self) -> AuthIdentity {
        AuthIdentity {
            user_id: self.user_id,
            email: self.email.clone(),
        }
    }

    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_claims(expires_at: DateTime<Utc>) -> SessionClaims {
        SessionClaims {
            user_id: 42,
            email: "ada@lab.org".into(),
            issued_at: Utc::now(),
            expires_at,
        }
    }

    #[test]
    fn to_identity_maps_all_fields() {
        let identity = make_claims(Utc::now() + chrono::TimeDelta::hours(1)).to_identity();
        assert_eq!(identity.user_id, 42);
        assert_eq!(identity.email, "ada@lab.org");
    }

    #[test]
    fn expired_at_boundary() {
        let exp = Utc::now();
        let claims = make_claims(exp);
        assert!(claims.is_expired_at(exp));
        assert!(!claims.is_expired_at(exp - chrono::TimeDelta::seconds(1)));
    }

    #[test]
    fn wire_names_are_short() {
        let json = serde_json::to_value(make_claims(Utc::now())).unwrap();
        assert_eq!(json["sub"], 42);
        assert!(json["exp"].is_i64());
        assert!(json.get("user_id").is_none());
    }
}
