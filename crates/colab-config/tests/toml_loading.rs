//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use colab_config::ColabConfig;

#[test]
fn loads_database_and_auth_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/colab/colab.db"
busy_timeout_ms = 250

[auth]
token_secret = "0123456789abcdef0123456789abcdef"
token_ttl_secs = 3600
"#,
        )?;

        let config: ColabConfig = Figment::from(Serialized::defaults(ColabConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/colab/colab.db");
        assert_eq!(config.database.busy_timeout_ms, 250);
        assert_eq!(config.auth.token_ttl_secs, 3600);
        assert!(config.auth.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "other.db"
"#,
        )?;

        let config: ColabConfig = Figment::from(Serialized::defaults(ColabConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "other.db");
        assert_eq!(config.database.busy_timeout_ms, 5_000);
        assert_eq!(config.auth.token_ttl_secs, 86_400);
        assert!(!config.auth.is_configured());
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".colab")?;
        jail.create_file(
            ".colab/config.toml",
            r#"
[database]
path = "project.db"
"#,
        )?;

        let config: ColabConfig = ColabConfig::figment().extract()?;
        assert_eq!(config.database.path, "project.db");
        Ok(())
    });
}

#[test]
fn wrong_type_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
busy_timeout_ms = "soon"
"#,
        )?;

        let result: Result<ColabConfig, _> =
            Figment::from(Serialized::defaults(ColabConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
