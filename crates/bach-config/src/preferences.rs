//! Where local UI preferences (favorites, expanded sections) are stored.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const PREFERENCES_FILE_NAME: &str = "preferences.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PreferencesConfig {
    /// Explicit preference file. Empty means `<config dir>/bach/preferences.json`.
    #[serde(default)]
    pub path: String,
}

impl PreferencesConfig {
    /// Resolve the preference file path, or `None` when no config dir exists.
    #[must_use]
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if self.path.trim().is_empty() {
            dirs::config_dir().map(|dir| dir.join("bach").join(PREFERENCES_FILE_NAME))
        } else {
            Some(PathBuf::from(self.path.trim()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = PreferencesConfig {
            path: "/tmp/bach-prefs.json".into(),
        };
        assert_eq!(
            config.resolved_path(),
            Some(PathBuf::from("/tmp/bach-prefs.json"))
        );
    }

    #[test]
    fn default_path_is_under_config_dir() {
        if let Some(path) = PreferencesConfig::default().resolved_path() {
            assert!(path.ends_with("bach/preferences.json"));
        }
    }
}
