use std::path::PathBuf;

use anyhow::Context;
use bach_client::BachClient;
use bach_config::BachConfig;
use bach_ui::FilePreferences;

/// Fallback when no user config directory exists.
const LOCAL_PREFERENCES_PATH: &str = ".bach/preferences.json";

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: BachConfig,
    pub client: BachClient,
    pub prefs: FilePreferences,
}

impl AppContext {
    pub fn init(config: BachConfig) -> anyhow::Result<Self> {
        let client = BachClient::new(&config.server).context("failed to build HTTP client")?;
        let prefs_path = config
            .preferences
            .resolved_path()
            .unwrap_or_else(|| PathBuf::from(LOCAL_PREFERENCES_PATH));
        tracing::debug!(path = %prefs_path.display(), "opening preferences");
        let prefs = FilePreferences::open(prefs_path);
        Ok(Self {
            config,
            client,
            prefs,
        })
    }
}
