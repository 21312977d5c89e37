//! Tree projection of the hierarchy document.
//!
//! [`TreeState`] holds the interface state (expanded sections and agents,
//! search query, type filter); [`TreeState::project`] combines it with a
//! document into a [`TreeView`]. Section and agent expansion are persisted
//! in the preference store. Search and filter are not.

use std::collections::BTreeSet;

use bach_core::{HierarchyDocument, Kind, Node};
use serde::Serialize;

use crate::error::PrefsError;
use crate::prefs::{EXPANDED_AGENTS_KEY, EXPANDED_SECTIONS_KEY, PreferenceStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Expansion {
    Collapsed,
    Expanded,
}

impl Expansion {
    #[must_use]
    pub const fn from_expanded(expanded: bool) -> Self {
        if expanded { Self::Expanded } else { Self::Collapsed }
    }

    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }

    #[must_use]
    pub const fn chevron(self) -> &'static str {
        match self {
            Self::Collapsed => "▶",
            Self::Expanded => "▼",
        }
    }
}

/// Toolbar filter showing either every section or a single kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(Kind),
}

impl TypeFilter {
    #[must_use]
    pub fn shows(self, kind: Kind) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == kind,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TreeState {
    expanded_sections: BTreeSet<Kind>,
    expanded_agents: BTreeSet<String>,
    search: String,
    filter: TypeFilter,
}

impl TreeState {
    /// Restore persisted expansion; unknown kind names are ignored.
    pub fn load(prefs: &impl PreferenceStore) -> Self {
        let expanded_sections = prefs
            .list_or(EXPANDED_SECTIONS_KEY, &[])
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect();
        let expanded_agents = prefs
            .list_or(EXPANDED_AGENTS_KEY, &[])
            .into_iter()
            .collect();
        Self {
            expanded_sections,
            expanded_agents,
            ..Self::default()
        }
    }

    /// Flip a section and persist the expanded set.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError`] when the preference cannot be written; the
    /// in-memory state has already changed.
    pub fn toggle_section(
        &mut self,
        kind: Kind,
        prefs: &mut impl PreferenceStore,
    ) -> Result<Expansion, PrefsError> {
        let expanded = if self.expanded_sections.remove(&kind) {
            false
        } else {
            self.expanded_sections.insert(kind)
        };
        let names: Vec<String> = self
            .expanded_sections
            .iter()
            .map(|kind| kind.as_str().to_string())
            .collect();
        prefs.set_list(EXPANDED_SECTIONS_KEY, &names)?;
        Ok(Expansion::from_expanded(expanded))
    }

    /// Flip an agent's nested rows and persist the expanded set.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError`] when the preference cannot be written.
    pub fn toggle_agent(
        &mut self,
        agent_id: &str,
        prefs: &mut impl PreferenceStore,
    ) -> Result<Expansion, PrefsError> {
        let expanded = if self.expanded_agents.remove(agent_id) {
            false
        } else {
            self.expanded_agents.insert(agent_id.to_string())
        };
        let ids: Vec<String> = self.expanded_agents.iter().cloned().collect();
        prefs.set_list(EXPANDED_AGENTS_KEY, &ids)?;
        Ok(Expansion::from_expanded(expanded))
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    pub const fn set_filter(&mut self, filter: TypeFilter) {
        self.filter = filter;
    }

    #[must_use]
    pub const fn filter(&self) -> TypeFilter {
        self.filter
    }

    /// Persisted expansion of a section, ignoring search and filter.
    #[must_use]
    pub fn stored_section(&self, kind: Kind) -> Expansion {
        Expansion::from_expanded(self.expanded_sections.contains(&kind))
    }

    #[must_use]
    pub fn stored_agent(&self, agent_id: &str) -> Expansion {
        Expansion::from_expanded(self.expanded_agents.contains(agent_id))
    }

    /// Expansion as displayed: a non-empty search or a single-kind filter
    /// opens the section without touching the stored preference.
    #[must_use]
    pub fn effective_section(&self, kind: Kind) -> Expansion {
        if !self.search.trim().is_empty() || self.filter == TypeFilter::Only(kind) {
            Expansion::Expanded
        } else {
            self.stored_section(kind)
        }
    }

    fn matches(&self, label: &str) -> bool {
        let query = self.search.trim().to_lowercase();
        query.is_empty() || label.to_lowercase().contains(&query)
    }

    #[must_use]
    pub fn project(&self, document: &HierarchyDocument) -> TreeView {
        let sections = Kind::ALL
            .into_iter()
            .filter(|kind| self.filter.shows(*kind))
            .map(|kind| {
                let nodes = document.nodes(kind);
                let rows = nodes
                    .iter()
                    .filter(|node| self.matches(node.display_name()))
                    .map(|node| self.row(document, kind, node))
                    .collect();
                SectionView {
                    kind,
                    label: kind.section_label(),
                    icon: kind.icon(),
                    count: nodes.len(),
                    expansion: self.effective_section(kind),
                    rows,
                }
            })
            .collect();
        TreeView { sections }
    }

    fn row(&self, document: &HierarchyDocument, kind: Kind, node: &Node) -> RowView {
        let assignment_count = if kind == Kind::Agent {
            document.assignment_count(&node.id)
        } else {
            0
        };
        let (children, expansion) = if assignment_count > 0 {
            let children = Kind::ASSIGNABLE
                .into_iter()
                .flat_map(|child_kind| {
                    document
                        .assigned_nodes(&node.id, child_kind)
                        .into_iter()
                        .map(move |child| ChildRow {
                            id: child.id.clone(),
                            kind: child_kind,
                            label: child.display_name().to_string(),
                        })
                })
                .filter(|child| self.matches(&child.label))
                .collect();
            (children, Some(self.stored_agent(&node.id)))
        } else {
            (Vec::new(), None)
        };

        RowView {
            id: node.id.clone(),
            kind,
            label: node.display_name().to_string(),
            icon: kind.icon(),
            draggable: kind != Kind::Agent,
            badge: (assignment_count > 0).then_some(assignment_count),
            assignment_count,
            expansion,
            children,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeView {
    pub sections: Vec<SectionView>,
}

impl TreeView {
    #[must_use]
    pub fn section(&self, kind: Kind) -> Option<&SectionView> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    /// Every row that would be visible, nested rows included.
    pub fn visible_labels(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .filter(|section| section.expansion.is_expanded())
            .flat_map(|section| section.rows.iter())
            .flat_map(|row| {
                let nested = row
                    .expansion
                    .filter(|expansion| expansion.is_expanded())
                    .map_or(&[][..], |_| row.children.as_slice());
                std::iter::once(row.label.as_str()).chain(nested.iter().map(|child| child.label.as_str()))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub kind: Kind,
    pub label: &'static str,
    pub icon: &'static str,
    /// Number of nodes of this kind, regardless of search.
    pub count: usize,
    pub expansion: Expansion,
    pub rows: Vec<RowView>,
}

impl SectionView {
    #[must_use]
    pub fn row(&self, id: &str) -> Option<&RowView> {
        self.rows.iter().find(|row| row.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: String,
    pub kind: Kind,
    pub label: String,
    pub icon: &'static str,
    /// Agents are drop targets, never drag sources.
    pub draggable: bool,
    /// Assignment count, shown only for agents with at least one assignment.
    pub badge: Option<usize>,
    pub assignment_count: usize,
    /// Nested-row toggle, present only when the row has children.
    pub expansion: Option<Expansion>,
    pub children: Vec<ChildRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildRow {
    pub id: String,
    pub kind: Kind,
    pub label: String,
}
