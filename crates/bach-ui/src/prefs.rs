//! Local key-value preferences.
//!
//! Mirrors a browser `localStorage`: string values under fixed keys, where
//! list-valued preferences are JSON-encoded sequences. Reading never fails;
//! an absent or unparseable value yields the caller's default.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PrefsError;

/// Favorite page hrefs shown on the dashboard.
pub const FAVORITES_KEY: &str = "bach-favorites";
/// Kind names of expanded skills-board sections.
pub const EXPANDED_SECTIONS_KEY: &str = "skills-expanded-sections";
/// Agent ids whose nested assignment rows are expanded.
pub const EXPANDED_AGENTS_KEY: &str = "skills-expanded-agents";

pub trait PreferenceStore {
    fn get_raw(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`PrefsError`] when the value cannot be persisted.
    fn set_raw(&mut self, key: &str, value: String) -> Result<(), PrefsError>;

    /// Read a JSON-encoded string list; `None` when absent or corrupt.
    fn get_list(&self, key: &str) -> Option<Vec<String>> {
        let raw = self.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(list) => Some(list),
            Err(error) => {
                tracing::debug!(key, %error, "ignoring unparseable preference");
                None
            }
        }
    }

    fn list_or(&self, key: &str, default: &[&str]) -> Vec<String> {
        self.get_list(key)
            .unwrap_or_else(|| default.iter().map(ToString::to_string).collect())
    }

    /// # Errors
    ///
    /// Returns [`PrefsError`] when the value cannot be encoded or persisted.
    fn set_list(&mut self, key: &str, values: &[String]) -> Result<(), PrefsError> {
        let raw = serde_json::to_string(values)?;
        self.set_raw(key, raw)
    }
}

/// Preferences held only for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_raw(&mut self, key: &str, value: String) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Preferences persisted as one JSON object in a file.
///
/// The whole file is rewritten on every change.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Open the preference file at `path`.
    ///
    /// A missing file starts empty. An unreadable or corrupt file also starts
    /// empty and is replaced on the next write.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|error| {
                tracing::warn!(path = %path.display(), %error, "corrupt preference file, starting empty");
                BTreeMap::new()
            }),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "unreadable preference file, starting empty");
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.values)?)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_raw(&mut self, key: &str, value: String) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_and_corrupt_values_fall_back() {
        let mut prefs = MemoryPreferences::default();
        assert_eq!(prefs.list_or(FAVORITES_KEY, &["/tasks"]), vec!["/tasks"]);

        prefs.set_raw(FAVORITES_KEY, "{not json".into()).unwrap();
        assert!(prefs.get_list(FAVORITES_KEY).is_none());
        assert_eq!(prefs.list_or(FAVORITES_KEY, &["/tasks"]), vec!["/tasks"]);
    }

    #[test]
    fn lists_are_json_encoded_strings() {
        let mut prefs = MemoryPreferences::default();
        prefs
            .set_list(EXPANDED_SECTIONS_KEY, &["agent".into(), "skill".into()])
            .unwrap();
        assert_eq!(
            prefs.get_raw(EXPANDED_SECTIONS_KEY).as_deref(),
            Some(r#"["agent","skill"]"#)
        );
    }

    #[test]
    fn file_preferences_persist_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut prefs = FilePreferences::open(&path);
        prefs.set_list(EXPANDED_AGENTS_KEY, &["ati".into()]).unwrap();

        let reopened = FilePreferences::open(&path);
        assert_eq!(reopened.get_list(EXPANDED_AGENTS_KEY), Some(vec!["ati".to_string()]));
    }

    #[test]
    fn corrupt_file_starts_empty_and_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "[1, 2").unwrap();

        let mut prefs = FilePreferences::open(&path);
        assert!(prefs.get_raw(FAVORITES_KEY).is_none());

        prefs.set_list(FAVORITES_KEY, &["/docs".into()]).unwrap();
        let reopened = FilePreferences::open(&path);
        assert_eq!(reopened.get_list(FAVORITES_KEY), Some(vec!["/docs".to_string()]));
    }
}
