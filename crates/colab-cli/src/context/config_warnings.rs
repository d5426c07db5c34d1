use colab_config::{ColabConfig, ENV_PREFIX};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &ColabConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ColabConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let defaults = ColabConfig::default();

    let mut warnings = Vec::new();

    if !config.auth.is_configured() && has_single_underscore_key(&env_keys, "AUTH") {
        warnings.push(format!(
            "Auth config appears default while {ENV_PREFIX}AUTH_* env vars exist. Use double underscores (example: {ENV_PREFIX}AUTH__TOKEN_SECRET)."
        ));
    }

    if config.database.path == defaults.database.path
        && has_single_underscore_key(&env_keys, "DATABASE")
    {
        warnings.push(format!(
            "Database config appears default while {ENV_PREFIX}DATABASE_* env vars exist. Use double underscores (example: {ENV_PREFIX}DATABASE__PATH)."
        ));
    }

    warnings
}

/// `COLAB_<SECTION>_X` without the `__` separator figment splits on.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let single = format!("{ENV_PREFIX}{section}_");
    let double = format!("{ENV_PREFIX}{section}__");
    keys.iter()
        .any(|key| key.starts_with(&single) && !key.starts_with(&double))
}

#[cfg(test)]
mod tests {
    use colab_config::{AuthConfig, ColabConfig, DatabaseConfig};

    use super::collect_unconfigured_warnings;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &ColabConfig::default(),
            env(&[
                ("COLAB_AUTH_TOKEN_SECRET", "0123456789abcdef0123456789abcdef"),
                ("COLAB_DATABASE_PATH", "/tmp/x.db"),
            ]),
        );
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("COLAB_AUTH__TOKEN_SECRET"));
    }

    #[test]
    fn correct_keys_do_not_warn() {
        let warnings = collect_unconfigured_warnings(
            &ColabConfig::default(),
            env(&[("COLAB_AUTH__TOKEN_SECRET", "short"), ("COLAB_TOKEN", "a.b")]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn does_not_warn_when_sections_are_configured() {
        let config = ColabConfig {
            database: DatabaseConfig {
                path: "/srv/colab.db".to_string(),
                ..Default::default()
            },
            auth: AuthConfig {
                token_secret: "0123456789abcdef0123456789abcdef".to_string(),
                ..Default::default()
            },
        };
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[("COLAB_AUTH_TOKEN_SECRET", "x"), ("COLAB_DATABASE_PATH", "y")]),
        );
        assert!(warnings.is_empty());
    }
}
