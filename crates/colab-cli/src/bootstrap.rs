use anyhow::Context;
use colab_config::ColabConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then layered config, then apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ColabConfig> {
    let mut config = ColabConfig::load_with_dotenv().context("failed to load colab configuration")?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn apply_overrides(config: &mut ColabConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.database {
        tracing::debug!(path, "database path overridden from command line");
        config.database.path.clone_from(path);
    }
}
