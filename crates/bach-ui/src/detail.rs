//! Detail panel: the selected node's Info and Source tabs.
//!
//! The source file is fetched lazily the first time the Source tab opens
//! and cached for as long as the same node stays selected. Each selection
//! gets a new epoch; a fetch result carrying an older epoch is dropped.

use bach_client::ClientError;
use bach_core::responses::ItemFileResponse;
use bach_core::{HierarchyDocument, Kind};
use serde::Serialize;

use crate::dnd::DropZone;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Info,
    Source,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub kind: Kind,
    pub id: String,
    pub epoch: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// Path relative to the BACH root, for display and copying.
    pub path: String,
    /// Opaque key sent back when saving.
    pub absolute_path: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SourceState {
    #[default]
    NotLoaded,
    Loading,
    Found(SourceFile),
    /// The server has no source file for this node.
    NotFound(Option<String>),
    /// The fetch itself failed; activating the tab again retries.
    Failed(String),
}

/// A source fetch the caller has to perform for the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRequest {
    pub kind: Kind,
    pub id: String,
    pub description: String,
    pub epoch: u64,
}

#[derive(Debug, Clone, Default)]
pub struct DetailPanel {
    selection: Option<Selection>,
    tab: Tab,
    source: SourceState,
    epochs: u64,
}

impl DetailPanel {
    #[must_use]
    pub const fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub const fn source(&self) -> &SourceState {
        &self.source
    }

    #[must_use]
    pub fn is_selected(&self, kind: Kind, id: &str) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|selection| selection.kind == kind && selection.id == id)
    }

    /// Select a node. Reselecting the current node keeps its tab and cache;
    /// any other node starts on the Info tab with an empty cache.
    pub fn select(&mut self, kind: Kind, id: &str) {
        if self.is_selected(kind, id) {
            return;
        }
        self.epochs += 1;
        self.selection = Some(Selection {
            kind,
            id: id.to_string(),
            epoch: self.epochs,
        });
        self.tab = Tab::Info;
        self.source = SourceState::NotLoaded;
    }

    pub fn clear(&mut self) {
        self.epochs += 1;
        self.selection = None;
        self.tab = Tab::Info;
        self.source = SourceState::NotLoaded;
    }

    /// Switch tabs; returns the fetch to perform when the source is not cached.
    pub fn activate(&mut self, tab: Tab, document: &HierarchyDocument) -> Option<SourceRequest> {
        self.tab = tab;
        if tab != Tab::Source {
            return None;
        }
        let selection = self.selection.as_ref()?;
        if !matches!(self.source, SourceState::NotLoaded | SourceState::Failed(_)) {
            return None;
        }
        let description = document
            .find(selection.kind, &selection.id)
            .map(|node| node.description.clone())
            .unwrap_or_default();
        self.source = SourceState::Loading;
        Some(SourceRequest {
            kind: selection.kind,
            id: selection.id.clone(),
            description,
            epoch: selection.epoch,
        })
    }

    /// Store a fetch result; returns `false` when it belongs to an older selection.
    pub fn apply_source(&mut self, epoch: u64, result: Result<ItemFileResponse, ClientError>) -> bool {
        if self.selection.as_ref().map(|selection| selection.epoch) != Some(epoch) {
            tracing::debug!(epoch, "dropping stale source result");
            return false;
        }
        self.source = match result {
            Ok(file) if file.success => SourceState::Found(SourceFile {
                absolute_path: file
                    .absolute_path
                    .or_else(|| file.path.clone())
                    .unwrap_or_default(),
                path: file.path.unwrap_or_default(),
                content: file.content.unwrap_or_default(),
            }),
            Ok(file) => SourceState::NotFound(file.error),
            Err(error) => SourceState::Failed(error.to_string()),
        };
        true
    }

    /// Replace the cached content after a successful save.
    pub fn update_source_content(&mut self, content: &str) {
        if let SourceState::Found(file) = &mut self.source {
            file.content = content.to_string();
        }
    }

    #[must_use]
    pub const fn source_file(&self) -> Option<&SourceFile> {
        match &self.source {
            SourceState::Found(file) => Some(file),
            _ => None,
        }
    }

    /// Project the Info tab for the current selection.
    #[must_use]
    pub fn info(&self, document: &HierarchyDocument, flow_visible: bool) -> Option<InfoView> {
        let selection = self.selection.as_ref()?;
        let node = document.find(selection.kind, &selection.id)?;

        let body = if selection.kind == Kind::Agent {
            let sections = Kind::ASSIGNABLE
                .into_iter()
                .map(|kind| AssignmentSection {
                    kind,
                    label: kind.section_label(),
                    icon: kind.icon(),
                    chips: document
                        .assigned_nodes(&node.id, kind)
                        .into_iter()
                        .map(|assigned| Chip {
                            id: assigned.id.clone(),
                            kind,
                            label: assigned.display_name().to_string(),
                        })
                        .collect(),
                    zone: DropZone::assignment(node.id.clone(), kind),
                })
                .collect();
            InfoBody::Agent {
                sections,
                flow_visible,
            }
        } else {
            InfoBody::UsedBy(
                document
                    .agents_using(selection.kind, &node.id)
                    .into_iter()
                    .map(|agent| Chip {
                        id: agent.id.clone(),
                        kind: Kind::Agent,
                        label: agent.display_name().to_string(),
                    })
                    .collect(),
            )
        };

        Some(InfoView {
            kind: selection.kind,
            id: node.id.clone(),
            title: node.display_name().to_string(),
            icon: selection.kind.icon(),
            kind_label: selection.kind.label(),
            description: node.description.clone(),
            body,
        })
    }
}

/// The Info tab of the detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoView {
    pub kind: Kind,
    pub id: String,
    pub title: String,
    pub icon: &'static str,
    pub kind_label: &'static str,
    pub description: String,
    pub body: InfoBody,
}

impl InfoView {
    #[must_use]
    pub fn description_text(&self) -> &str {
        if self.description.trim().is_empty() {
            "No description."
        } else {
            &self.description
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoBody {
    /// Assignment sections plus the team-flow panel toggle.
    Agent {
        sections: Vec<AssignmentSection>,
        flow_visible: bool,
    },
    /// Agents that reference the selected node.
    UsedBy(Vec<Chip>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentSection {
    pub kind: Kind,
    pub label: &'static str,
    pub icon: &'static str,
    /// Assigned nodes; dangling ids are already skipped.
    pub chips: Vec<Chip>,
    pub zone: DropZone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub id: String,
    pub kind: Kind,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn document() -> HierarchyDocument {
        serde_json::from_value(serde_json::json!({
            "items": {
                "agents": [{"id": "ati", "name": ""}, {"id": "steuer", "name": "Steuer"}],
                "skills": [{"id": "s1", "name": "Scan", "description": "scans"}]
            },
            "assignments": {
                "ati": {"skills": ["s1", "ghost"]},
                "steuer": {"skills": ["s1"]},
                "removed-agent": {"skills": ["s1"]}
            }
        }))
        .unwrap()
    }

    fn found(content: &str) -> ItemFileResponse {
        ItemFileResponse {
            success: true,
            content: Some(content.into()),
            path: Some("skills/scan.md".into()),
            absolute_path: Some("/opt/bach/skills/scan.md".into()),
            ..ItemFileResponse::default()
        }
    }

    #[test]
    fn source_is_cached_per_selection() {
        let doc = document();
        let mut panel = DetailPanel::default();
        panel.select(Kind::Skill, "s1");

        let request = panel.activate(Tab::Source, &doc).unwrap();
        assert_eq!(request.description, "scans");
        assert_eq!(panel.source(), &SourceState::Loading);
        assert!(panel.apply_source(request.epoch, Ok(found("X"))));

        panel.activate(Tab::Info, &doc);
        panel.select(Kind::Skill, "s1");
        assert!(panel.activate(Tab::Source, &doc).is_none());
        assert_eq!(panel.source_file().unwrap().content, "X");
    }

    #[test]
    fn different_selection_resets_the_cache() {
        let doc = document();
        let mut panel = DetailPanel::default();
        panel.select(Kind::Skill, "s1");
        let request = panel.activate(Tab::Source, &doc).unwrap();
        panel.apply_source(request.epoch, Ok(found("X")));

        panel.select(Kind::Agent, "ati");
        assert_eq!(panel.tab(), Tab::Info);
        assert_eq!(panel.source(), &SourceState::NotLoaded);

        panel.select(Kind::Skill, "s1");
        assert!(panel.activate(Tab::Source, &doc).is_some());
    }

    #[test]
    fn stale_results_are_dropped() {
        let doc = document();
        let mut panel = DetailPanel::default();
        panel.select(Kind::Skill, "s1");
        let stale = panel.activate(Tab::Source, &doc).unwrap();

        panel.select(Kind::Agent, "ati");
        assert!(!panel.apply_source(stale.epoch, Ok(found("X"))));
        assert_eq!(panel.source(), &SourceState::NotLoaded);
    }

    #[test]
    fn not_found_is_cached_and_failure_retries() {
        let doc = document();
        let mut panel = DetailPanel::default();
        panel.select(Kind::Skill, "s1");

        let request = panel.activate(Tab::Source, &doc).unwrap();
        panel.apply_source(request.epoch, Err(ClientError::Parse("bad body".into())));
        assert!(matches!(panel.source(), SourceState::Failed(_)));

        let retry = panel.activate(Tab::Source, &doc).unwrap();
        let missing = ItemFileResponse {
            success: false,
            error: Some("no file".into()),
            ..ItemFileResponse::default()
        };
        panel.apply_source(retry.epoch, Ok(missing));
        assert_eq!(panel.source(), &SourceState::NotFound(Some("no file".into())));
        assert!(panel.activate(Tab::Source, &doc).is_none());
    }

    #[test]
    fn agent_info_lists_assignments_and_zones() {
        let doc = document();
        let mut panel = DetailPanel::default();
        panel.select(Kind::Agent, "ati");

        let info = panel.info(&doc, false).unwrap();
        assert_eq!(info.title, "ati");
        assert_eq!(info.description_text(), "No description.");
        let InfoBody::Agent { sections, .. } = info.body else {
            panic!("agent body expected");
        };
        assert_eq!(sections.len(), 4);
        let skills = sections.iter().find(|s| s.kind == Kind::Skill).unwrap();
        assert_eq!(skills.chips.len(), 1);
        assert_eq!(skills.zone, DropZone::assignment("ati", Kind::Skill));
    }

    #[test]
    fn non_agent_info_lists_known_users() {
        let doc = document();
        let mut panel = DetailPanel::default();
        panel.select(Kind::Skill, "s1");

        let info = panel.info(&doc, false).unwrap();
        let InfoBody::UsedBy(agents) = info.body else {
            panic!("used-by body expected");
        };
        let labels: Vec<&str> = agents.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["ati", "Steuer"]);
    }
}
