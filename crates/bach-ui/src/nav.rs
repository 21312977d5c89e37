//! Navigation bar and dashboard favorites.

use serde::Serialize;

use crate::error::PrefsError;
use crate::prefs::{FAVORITES_KEY, PreferenceStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
    /// Launches the desktop prompt manager instead of navigating.
    pub desktop: bool,
}

const fn link(href: &'static str, label: &'static str) -> NavItem {
    NavItem {
        href,
        label,
        icon: None,
        desktop: false,
    }
}

pub static NAV_ITEMS: [NavItem; 12] = [
    link("/", "Dashboard"),
    NavItem {
        icon: Some("📋"),
        ..link("/tasks-board", "Tasks-Board")
    },
    link("/agents", "Agents"),
    link("/partners", "Partners"),
    link("/skills-board", "Skills"),
    link("/memory", "Memory"),
    link("/tools", "Tools"),
    NavItem {
        href: "#",
        label: "Prompts",
        icon: Some("🖥️"),
        desktop: true,
    },
    link("/messages", "Messages"),
    NavItem {
        icon: Some("🛠️"),
        ..link("/maintenance", "Maintenance")
    },
    link("/help", "Help"),
    link("/wiki", "Wiki"),
];

impl NavItem {
    /// Exact match, trailing-slash match, or prefix match for non-root items.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        if self.desktop {
            return false;
        }
        current_path == self.href
            || current_path.strip_suffix('/') == Some(self.href)
            || (self.href != "/" && current_path.starts_with(self.href))
    }
}

/// Navigation items with the active one flagged.
#[must_use]
pub fn nav_for(current_path: &str) -> Vec<(NavItem, bool)> {
    NAV_ITEMS
        .iter()
        .map(|item| (*item, item.is_active(current_path)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub href: &'static str,
    pub label: &'static str,
    pub primary: bool,
}

const fn page(href: &'static str, label: &'static str) -> Page {
    Page {
        href,
        label,
        primary: false,
    }
}

/// Every page that can be pinned as a favorite.
pub static ALL_PAGES: [Page; 19] = [
    Page {
        primary: true,
        ..page("/tasks", "All Tasks")
    },
    page("/agents", "Agents"),
    page("/agents/ati", "ATI"),
    page("/agents/steuer", "Steuer"),
    page("/agents/gesundheit", "Gesundheit"),
    page("/agents/persoenlich", "Persoenlich"),
    page("/agents/foerderplaner", "Foerderplaner"),
    page("/partners", "Partners"),
    page("/skills-board", "Skills Board"),
    page("/financial", "Financial"),
    page("/memory", "Memory"),
    page("/tools", "Tools"),
    page("/prompt-generator", "Prompt-Gen"),
    page("/messages", "Messages"),
    page("/daemon", "Daemon"),
    page("/inbox", "Inbox"),
    page("/scanner", "Scanner"),
    page("/help", "Help"),
    page("/docs", "API Docs"),
];

pub const DEFAULT_FAVORITES: [&str; 6] = [
    "/tasks",
    "/agents",
    "/skills-board",
    "/agents/ati",
    "/financial",
    "/docs",
];

#[must_use]
pub fn find_page(href: &str) -> Option<&'static Page> {
    ALL_PAGES.iter().find(|page| page.href == href)
}

/// Favorite hrefs as stored; absent or corrupt preferences yield the defaults.
#[must_use]
pub fn favorites(prefs: &impl PreferenceStore) -> Vec<String> {
    prefs.list_or(FAVORITES_KEY, &DEFAULT_FAVORITES)
}

/// Favorites resolved to pages; unknown hrefs are skipped.
#[must_use]
pub fn favorite_pages(prefs: &impl PreferenceStore) -> Vec<&'static Page> {
    favorites(prefs)
        .iter()
        .filter_map(|href| find_page(href))
        .collect()
}

/// Add `href` to the favorites or remove it; returns whether it is now a favorite.
///
/// # Errors
///
/// Returns [`PrefsError`] when the list cannot be persisted.
pub fn toggle_favorite(prefs: &mut impl PreferenceStore, href: &str) -> Result<bool, PrefsError> {
    let mut list = favorites(&*prefs);
    let added = if let Some(index) = list.iter().position(|entry| entry == href) {
        list.remove(index);
        false
    } else {
        list.push(href.to_string());
        true
    };
    prefs.set_list(FAVORITES_KEY, &list)?;
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferences;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("/", "/", true)]
    #[case("/", "/agents", false)]
    #[case("/agents", "/agents/", true)]
    #[case("/agents", "/agents/ati", true)]
    #[case("/skills-board", "/skills", false)]
    #[case("#", "#", false)]
    fn active_detection(#[case] href: &str, #[case] path: &str, #[case] active: bool) {
        let item = NAV_ITEMS.iter().find(|item| item.href == href).unwrap();
        assert_eq!(item.is_active(path), active);
    }

    #[test]
    fn only_prompts_is_a_desktop_action() {
        let desktop: Vec<&str> = NAV_ITEMS.iter().filter(|i| i.desktop).map(|i| i.label).collect();
        assert_eq!(desktop, vec!["Prompts"]);
    }

    #[test]
    fn defaults_when_absent_or_corrupt() {
        let mut prefs = MemoryPreferences::default();
        assert_eq!(favorites(&prefs), DEFAULT_FAVORITES.to_vec());

        prefs.set_raw(FAVORITES_KEY, "not json".into()).unwrap();
        assert_eq!(favorites(&prefs), DEFAULT_FAVORITES.to_vec());
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut prefs = MemoryPreferences::default();
        assert!(toggle_favorite(&mut prefs, "/scanner").unwrap());
        assert!(favorites(&prefs).contains(&"/scanner".to_string()));

        assert!(!toggle_favorite(&mut prefs, "/tasks").unwrap());
        assert!(!favorites(&prefs).contains(&"/tasks".to_string()));
    }

    #[test]
    fn unknown_hrefs_are_skipped() {
        let mut prefs = MemoryPreferences::default();
        prefs
            .set_list(FAVORITES_KEY, &["/gone".into(), "/docs".into()])
            .unwrap();
        let labels: Vec<&str> = favorite_pages(&prefs).iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["API Docs"]);
    }
}
