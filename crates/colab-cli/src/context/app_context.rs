use anyhow::Context;
use colab_auth::{AuthError, Authenticator, SessionTokenAuthenticator, parse_bearer};
use colab_config::ColabConfig;
use colab_core::identity::AuthIdentity;
use colab_core::ids::UserId;
use colab_db::service::ColabService;

use crate::cli::GlobalFlags;

/// Everything a command handler needs: the open store, the token verifier
/// and whatever token the caller presented.
pub struct AppContext {
    pub service: ColabService,
    authenticator: Option<SessionTokenAuthenticator>,
    token: Option<String>,
}

impl AppContext {
    /// Open the database and prepare the authenticator.
    ///
    /// A missing `[auth]` section is not an error here; commands that need
    /// tokens fail later with a `config` error.
    pub async fn init(config: &ColabConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let service = ColabService::from_config(&config.database)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        let authenticator = if config.auth.is_configured() {
            Some(SessionTokenAuthenticator::from_config(&config.auth)?)
        } else {
            tracing::debug!("auth section not configured; token commands unavailable");
            None
        };

        Ok(Self {
            service,
            authenticator,
            token: flags.token.clone(),
        })
    }

    /// The configured token authority.
    pub fn authenticator(&self) -> Result<&SessionTokenAuthenticator, AuthError> {
        self.authenticator.as_ref().ok_or_else(|| {
            AuthError::Misconfigured(
                "auth.token_secret is not set (COLAB_AUTH__TOKEN_SECRET)".to_string(),
            )
        })
    }

    /// Authenticate the presented token. A full `Bearer <token>` header value
    /// is accepted as well.
    pub async fn identity(&self) -> Result<AuthIdentity, AuthError> {
        let raw = self.token.as_deref().ok_or(AuthError::NotAuthenticated)?;
        let token = if raw.trim().contains(' ') {
            parse_bearer(raw)?
        } else {
            raw
        };
        self.authenticator()?.authenticate(token).await
    }

    pub async fn caller_id(&self) -> Result<UserId, AuthError> {
        let identity = self.identity().await?;
        tracing::debug!(user_id = identity.user_id, "authenticated caller");
        Ok(identity.user_id)
    }
}
