//! Dashboard refresh settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_refresh_interval_secs() -> u64 {
    30
}

const fn default_recent_tasks() -> usize {
    5
}

const fn default_title_max_chars() -> usize {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Seconds between automatic dashboard refreshes.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// Number of tasks shown in the recent-tasks widget.
    #[serde(default = "default_recent_tasks")]
    pub recent_tasks: usize,

    /// Task titles longer than this are truncated with `...`.
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval_secs(),
            recent_tasks: default_recent_tasks(),
            title_max_chars: default_title_max_chars(),
        }
    }
}

impl DashboardConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the refresh interval is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_interval_secs == 0 {
            return Err(ConfigError::invalid(
                "dashboard.refresh_interval_secs",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DashboardConfig::default();
        assert_eq!(config.refresh_interval_secs, 30);
        assert_eq!(config.recent_tasks, 5);
        assert_eq!(config.title_max_chars, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_interval_is_invalid() {
        let config = DashboardConfig {
            refresh_interval_secs: 0,
            ..DashboardConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
