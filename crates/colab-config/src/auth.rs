//! Session token configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Shortest accepted signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Default token lifetime: one day.
const fn default_token_ttl_secs() -> i64 {
    86_400
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify session tokens.
    #[serde(default)]
    pub token_secret: String,

    /// Lifetime of newly issued tokens, in seconds.
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: String::new(),
            token_ttl_secs: default_token_ttl_secs(),
        }
    }
}

impl AuthConfig {
    /// Check if a signing secret is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.token_secret.is_empty()
    }

    /// Validate the section before it is used to sign anything.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` without a secret, and
    /// `ConfigError::InvalidValue` for a short secret or non-positive TTL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "auth".into(),
            });
        }
        if self.token_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::InvalidValue {
                field: "auth.token_secret".into(),
                reason: format!("must be at least {MIN_SECRET_LEN} bytes"),
            });
        }
        if self.token_ttl_secs <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "auth.token_ttl_secs".into(),
                reason: "must be positive".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn default_is_not_configured() {
        let config = AuthConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.token_ttl_secs, 86_400);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn short_secret_is_invalid() {
        let config = AuthConfig {
            token_secret: "short".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn zero_ttl_is_invalid() {
        let config = AuthConfig {
            token_secret: SECRET.into(),
            token_ttl_secs: 0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn valid_config_passes() {
        let config = AuthConfig {
            token_secret: SECRET.into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
