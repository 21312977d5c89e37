use anyhow::Context;
use bach_config::BachConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (`.env`, TOML files, `BACH_*`) and apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<BachConfig> {
    let mut config = BachConfig::load_with_dotenv().context("failed to load bach configuration")?;
    if let Some(server) = &flags.server {
        config.server.base_url.clone_from(server);
        config
            .server
            .validate()
            .context("invalid --server value")?;
    }
    tracing::debug!(base_url = %config.server.base_url, "configuration loaded");
    Ok(config)
}
