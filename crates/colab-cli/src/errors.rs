//! Map failures to the `colab error [<kind>]: <message>` line on stderr.

use colab_auth::AuthError;
use colab_config::ConfigError;
use colab_core::errors::CoreError;
use colab_db::error::{DatabaseError, ServiceError};

/// Stable category for an error, searched through the whole context chain.
pub fn kind(error: &anyhow::Error) -> &'static str {
    for cause in error.chain() {
        if let Some(e) = cause.downcast_ref::<ServiceError>() {
            return e.kind().as_str();
        }
        if let Some(e) = cause.downcast_ref::<CoreError>() {
            return e.kind().as_str();
        }
        if let Some(e) = cause.downcast_ref::<AuthError>() {
            return match e {
                AuthError::Misconfigured(_) => "config",
                _ => "unauthorized",
            };
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return "config";
        }
        if cause.downcast_ref::<DatabaseError>().is_some() {
            return "store";
        }
    }
    "internal"
}

pub fn render(error: &anyhow::Error) -> String {
    format!("colab error [{}]: {error:#}", kind(error))
}
