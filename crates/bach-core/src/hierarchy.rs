//! The skills-board hierarchy document.
//!
//! A [`HierarchyDocument`] is the single unit of persistence for the board:
//! it is fetched whole, mutated in memory, and written back whole. All
//! mutations here are pure in-memory operations; persisting them is the
//! caller's job.
//!
//! Assignment targets are not guaranteed to exist. Readers skip dangling ids
//! (see [`HierarchyDocument::assigned_nodes`]) instead of failing.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::Kind;
use crate::errors::CoreError;
use crate::serde_util::null_as_default;

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// One item of the hierarchy (an agent, expert, skill, service or workflow).
///
/// The kind is implied by the sequence the node lives in. Ids are unique
/// within a kind but not across kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Node {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub description: String,
    /// Ordered steps, present on workflows exported from a team flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<StepRef>>,
    /// Fields the board does not interpret; kept so a save does not drop them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Node {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The label to show for this node: its name, or its id when the name is blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// A `{id, type}` reference used as a workflow step.
///
/// The type is kept as written: workflows authored elsewhere may reference
/// step types the board does not know, and those must survive a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StepRef {
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    #[schemars(with = "String")]
    pub step_type: String,
}

impl StepRef {
    pub fn new(id: impl Into<String>, kind: Kind) -> Self {
        Self {
            id: id.into(),
            step_type: kind.as_str().to_string(),
        }
    }

    /// The step's kind, or `None` for a type outside [`Kind`].
    #[must_use]
    pub fn kind(&self) -> Option<Kind> {
        self.step_type.parse().ok()
    }
}

// ---------------------------------------------------------------------------
// Items and assignments
// ---------------------------------------------------------------------------

/// Nodes grouped by kind, each group in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HierarchyItems {
    #[serde(default, deserialize_with = "null_as_default")]
    pub agents: Vec<Node>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experts: Vec<Node>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<Node>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<Node>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub workflows: Vec<Node>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HierarchyItems {
    #[must_use]
    pub fn of(&self, kind: Kind) -> &[Node] {
        match kind {
            Kind::Agent => &self.agents,
            Kind::Expert => &self.experts,
            Kind::Skill => &self.skills,
            Kind::Service => &self.services,
            Kind::Workflow => &self.workflows,
        }
    }

    pub const fn of_mut(&mut self, kind: Kind) -> &mut Vec<Node> {
        match kind {
            Kind::Agent => &mut self.agents,
            Kind::Expert => &mut self.experts,
            Kind::Skill => &mut self.skills,
            Kind::Service => &mut self.services,
            Kind::Workflow => &mut self.workflows,
        }
    }
}

/// What one agent has been given, per assignable kind, in assignment order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AgentAssignments {
    #[serde(default, deserialize_with = "null_as_default")]
    pub experts: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub workflows: Vec<String>,
    /// Keys the board does not manage, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AgentAssignments {
    /// Assigned ids of `kind`, or `None` for [`Kind::Agent`].
    #[must_use]
    pub fn ids(&self, kind: Kind) -> Option<&[String]> {
        match kind {
            Kind::Agent => None,
            Kind::Expert => Some(&self.experts),
            Kind::Skill => Some(&self.skills),
            Kind::Service => Some(&self.services),
            Kind::Workflow => Some(&self.workflows),
        }
    }

    pub const fn ids_mut(&mut self, kind: Kind) -> Option<&mut Vec<String>> {
        match kind {
            Kind::Agent => None,
            Kind::Expert => Some(&mut self.experts),
            Kind::Skill => Some(&mut self.skills),
            Kind::Service => Some(&mut self.services),
            Kind::Workflow => Some(&mut self.workflows),
        }
    }

    /// Total number of assigned ids, dangling ones included.
    #[must_use]
    pub fn total(&self) -> usize {
        self.experts.len() + self.skills.len() + self.services.len() + self.workflows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Result of [`HierarchyDocument::assign`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOutcome {
    Assigned,
    AlreadyAssigned,
}

// ---------------------------------------------------------------------------
// HierarchyDocument
// ---------------------------------------------------------------------------

/// The whole skills-board document as served by `/api/skills-board/hierarchy`.
///
/// `Default` is the empty skeleton substituted when loading fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HierarchyDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: HierarchyItems,
    /// Agent id → assigned node ids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub assignments: BTreeMap<String, AgentAssignments>,
    /// Expert id → skill ids.
    #[serde(
        rename = "expertSkills",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub expert_skills: BTreeMap<String, Vec<String>>,
    /// Top-level fields owned by the server (e.g. `_meta`).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HierarchyDocument {
    #[must_use]
    pub fn nodes(&self, kind: Kind) -> &[Node] {
        self.items.of(kind)
    }

    #[must_use]
    pub fn find(&self, kind: Kind, id: &str) -> Option<&Node> {
        self.items.of(kind).iter().find(|node| node.id == id)
    }

    #[must_use]
    pub fn assignments_of(&self, agent_id: &str) -> Option<&AgentAssignments> {
        self.assignments.get(agent_id)
    }

    /// Number of ids assigned to `agent_id` (0 when the agent has no entry).
    #[must_use]
    pub fn assignment_count(&self, agent_id: &str) -> usize {
        self.assignments_of(agent_id)
            .map_or(0, AgentAssignments::total)
    }

    /// Nodes of `kind` assigned to `agent_id`, in assignment order.
    ///
    /// Ids that do not resolve to an existing node of `kind` are skipped.
    #[must_use]
    pub fn assigned_nodes(&self, agent_id: &str, kind: Kind) -> Vec<&Node> {
        self.assignments_of(agent_id)
            .and_then(|assignments| assignments.ids(kind))
            .unwrap_or_default()
            .iter()
            .filter_map(|id| self.find(kind, id))
            .collect()
    }

    /// Agents whose assignments reference `id` of `kind`.
    ///
    /// Agents present in `assignments` but missing from `items.agents` are skipped.
    #[must_use]
    pub fn agents_using(&self, kind: Kind, id: &str) -> Vec<&Node> {
        self.assignments
            .iter()
            .filter(|(_, assignments)| {
                assignments
                    .ids(kind)
                    .is_some_and(|ids| ids.iter().any(|assigned| assigned == id))
            })
            .filter_map(|(agent_id, _)| self.find(Kind::Agent, agent_id))
            .collect()
    }

    /// Skill ids attached to an expert.
    #[must_use]
    pub fn expert_skill_ids(&self, expert_id: &str) -> &[String] {
        self.expert_skills
            .get(expert_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Append `node_id` to the agent's `kind` assignments unless already present.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotAssignable`] when `kind` is [`Kind::Agent`].
    pub fn assign(
        &mut self,
        agent_id: &str,
        kind: Kind,
        node_id: &str,
    ) -> Result<AssignOutcome, CoreError> {
        if !kind.is_assignable() {
            return Err(CoreError::NotAssignable(kind));
        }
        let ids = self
            .assignments
            .entry(agent_id.to_string())
            .or_default()
            .ids_mut(kind)
            .ok_or(CoreError::NotAssignable(kind))?;

        if ids.iter().any(|id| id == node_id) {
            return Ok(AssignOutcome::AlreadyAssigned);
        }
        ids.push(node_id.to_string());
        Ok(AssignOutcome::Assigned)
    }

    /// Remove the first occurrence of `node_id`; returns whether anything changed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotAssignable`] when `kind` is [`Kind::Agent`].
    pub fn unassign(&mut self, agent_id: &str, kind: Kind, node_id: &str) -> Result<bool, CoreError> {
        if !kind.is_assignable() {
            return Err(CoreError::NotAssignable(kind));
        }
        let Some(ids) = self
            .assignments
            .get_mut(agent_id)
            .and_then(|assignments| assignments.ids_mut(kind))
        else {
            return Ok(false);
        };

        match ids.iter().position(|id| id == node_id) {
            Some(index) => {
                ids.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Add or remove `skill_id` from an expert's skills; returns whether anything changed.
    pub fn set_expert_skill(&mut self, expert_id: &str, skill_id: &str, present: bool) -> bool {
        if present {
            let skills = self.expert_skills.entry(expert_id.to_string()).or_default();
            if skills.iter().any(|id| id == skill_id) {
                return false;
            }
            skills.push(skill_id.to_string());
            true
        } else {
            let Some(skills) = self.expert_skills.get_mut(expert_id) else {
                return false;
            };
            match skills.iter().position(|id| id == skill_id) {
                Some(index) => {
                    skills.remove(index);
                    true
                }
                None => false,
            }
        }
    }

    /// Rename a node and replace its description.
    ///
    /// Both values are trimmed; the name must not be empty.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a blank name and
    /// [`CoreError::NotFound`] when no node of `kind` has `id`.
    pub fn update_node(
        &mut self,
        kind: Kind,
        id: &str,
        name: &str,
        description: &str,
    ) -> Result<(), CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("name is required".into()));
        }
        let node = self
            .items
            .of_mut(kind)
            .iter_mut()
            .find(|node| node.id == id)
            .ok_or_else(|| CoreError::NotFound {
                kind,
                id: id.to_string(),
            })?;
        node.name = name.to_string();
        node.description = description.trim().to_string();
        Ok(())
    }

    pub fn add_workflow(&mut self, node: Node) {
        self.items.workflows.push(node);
    }
}
