//! # colab-config
//!
//! Layered configuration loading for Colab using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COLAB_*` prefix, `__` as separator)
//! 2. Project-level `.colab/config.toml`
//! 3. User-level `~/.config/colab/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `COLAB_DATABASE__PATH` -> `database.path`,
//! `COLAB_AUTH__TOKEN_SECRET` -> `auth.token_secret`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use colab_config::ColabConfig;
//!
//! let config = ColabConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod auth;
mod database;
mod error;

pub use auth::{AuthConfig, MIN_SECRET_LEN};
pub use database::DatabaseConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for all Colab settings.
pub const ENV_PREFIX: &str = "COLAB_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ColabConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl ColabConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal outside development.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = Self::local_config_path();
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the project-local config file, relative to the working directory.
    #[must_use]
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(".colab").join("config.toml")
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("colab").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ColabConfig::default();
        assert!(!config.auth.is_configured());
        assert_eq!(config.database.path, "colab.db");
    }

    #[test]
    fn local_path_is_under_dot_colab() {
        assert!(ColabConfig::local_config_path().ends_with(".colab/config.toml"));
    }
}
