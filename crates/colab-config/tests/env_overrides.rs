use figment::Jail;
use colab_config::ColabConfig;

#[test]
fn env_fills_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("COLAB_DATABASE__PATH", "/tmp/env.db");
        jail.set_env("COLAB_AUTH__TOKEN_TTL_SECS", "60");

        let config = ColabConfig::load().expect("config loads");
        assert_eq!(config.database.path, "/tmp/env.db");
        assert_eq!(config.auth.token_ttl_secs, 60);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".colab")?;
        jail.create_file(
            ".colab/config.toml",
            r#"
[auth]
token_secret = "from-file-from-file-from-file-000"
"#,
        )?;
        jail.set_env("COLAB_AUTH__TOKEN_SECRET", "from-env-from-env-from-env-000000");

        let config = ColabConfig::load().expect("config loads");
        assert_eq!(config.auth.token_secret, "from-env-from-env-from-env-000000");
        Ok(())
    });
}
