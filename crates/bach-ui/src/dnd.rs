//! Drag-and-drop controller.
//!
//! ```text
//! Idle --start--> Dragging --hover(valid zone)--> Hovering
//!                    ^                               |
//!                    +------------leave / drop-------+
//! any state --end--> Idle
//! ```
//!
//! Hovering a zone that does not accept the dragged kind leaves the state
//! unchanged. [`DragController::end`] is the single cleanup path and runs
//! whether or not a drop happened.

use bach_core::{CoreError, Kind, Node};
use serde::Serialize;

/// What is being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragToken {
    pub id: String,
    pub kind: Kind,
    pub name: String,
}

impl DragToken {
    #[must_use]
    pub fn from_node(kind: Kind, node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            kind,
            name: node.display_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accepts {
    Kind(Kind),
    /// The team-flow canvas takes any kind.
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropZone {
    pub accepts: Accepts,
    pub agent_id: Option<String>,
}

impl DropZone {
    /// Zone in an agent's detail panel collecting nodes of one kind.
    #[must_use]
    pub fn assignment(agent_id: impl Into<String>, kind: Kind) -> Self {
        Self {
            accepts: Accepts::Kind(kind),
            agent_id: Some(agent_id.into()),
        }
    }

    #[must_use]
    pub const fn flow() -> Self {
        Self {
            accepts: Accepts::Any,
            agent_id: None,
        }
    }

    #[must_use]
    pub fn accepts(&self, kind: Kind) -> bool {
        match self.accepts {
            Accepts::Any => true,
            Accepts::Kind(accepted) => accepted == kind,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragToken),
    Hovering { token: DragToken, zone: DropZone },
}

/// What a drop asks the board to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    Assign {
        agent_id: String,
        kind: Kind,
        node_id: String,
    },
    AppendToFlow(DragToken),
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    #[must_use]
    pub const fn token(&self) -> Option<&DragToken> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(token) | DragState::Hovering { token, .. } => Some(token),
        }
    }

    /// Zone currently highlighted, if any.
    #[must_use]
    pub const fn highlighted(&self) -> Option<&DropZone> {
        match &self.state {
            DragState::Hovering { zone, .. } => Some(zone),
            _ => None,
        }
    }

    /// Begin dragging a tree row.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotAssignable`] for agents, which are drop targets only.
    pub fn start(&mut self, token: DragToken) -> Result<(), CoreError> {
        if token.kind == Kind::Agent {
            return Err(CoreError::NotAssignable(Kind::Agent));
        }
        tracing::debug!(id = %token.id, kind = %token.kind, "drag start");
        self.state = DragState::Dragging(token);
        Ok(())
    }

    /// Enter a zone; returns whether it is highlighted.
    pub fn hover(&mut self, zone: &DropZone) -> bool {
        let Some(token) = self.token() else {
            return false;
        };
        if !zone.accepts(token.kind) {
            return false;
        }
        let token = token.clone();
        self.state = DragState::Hovering {
            token,
            zone: zone.clone(),
        };
        true
    }

    /// Leave the highlighted zone.
    pub fn leave(&mut self) {
        self.state = match std::mem::take(&mut self.state) {
            DragState::Hovering { token, .. } => DragState::Dragging(token),
            other => other,
        };
    }

    /// Release over `zone`. The drag itself continues until [`Self::end`].
    pub fn drop_on(&mut self, zone: &DropZone) -> DropAction {
        let Some(token) = self.token().cloned() else {
            return DropAction::Ignored;
        };
        self.state = DragState::Dragging(token.clone());

        if !zone.accepts(token.kind) {
            return DropAction::Ignored;
        }
        match (&zone.accepts, &zone.agent_id) {
            (Accepts::Any, _) => DropAction::AppendToFlow(token),
            (Accepts::Kind(_), Some(agent_id)) => DropAction::Assign {
                agent_id: agent_id.clone(),
                kind: token.kind,
                node_id: token.id,
            },
            (Accepts::Kind(_), None) => DropAction::Ignored,
        }
    }

    /// Clear the token and any highlight.
    pub fn end(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn skill() -> DragToken {
        DragToken {
            id: "s1".into(),
            kind: Kind::Skill,
            name: "Scan".into(),
        }
    }

    #[test]
    fn agents_cannot_be_dragged() {
        let mut dnd = DragController::default();
        let agent = DragToken {
            id: "ati".into(),
            kind: Kind::Agent,
            name: "ATI".into(),
        };
        assert_eq!(dnd.start(agent), Err(CoreError::NotAssignable(Kind::Agent)));
        assert_eq!(dnd.state(), &DragState::Idle);
    }

    #[test]
    fn hovering_a_mismatched_zone_is_a_noop() {
        let mut dnd = DragController::default();
        dnd.start(skill()).unwrap();
        assert!(!dnd.hover(&DropZone::assignment("ati", Kind::Expert)));
        assert_eq!(dnd.state(), &DragState::Dragging(skill()));
    }

    #[test]
    fn matching_zone_highlights_and_leave_clears() {
        let mut dnd = DragController::default();
        dnd.start(skill()).unwrap();
        let zone = DropZone::assignment("ati", Kind::Skill);
        assert!(dnd.hover(&zone));
        assert_eq!(dnd.highlighted(), Some(&zone));
        dnd.leave();
        assert_eq!(dnd.state(), &DragState::Dragging(skill()));
    }

    #[test]
    fn drop_on_matching_zone_assigns() {
        let mut dnd = DragController::default();
        dnd.start(skill()).unwrap();
        let action = dnd.drop_on(&DropZone::assignment("ati", Kind::Skill));
        assert_eq!(
            action,
            DropAction::Assign {
                agent_id: "ati".into(),
                kind: Kind::Skill,
                node_id: "s1".into()
            }
        );
        assert!(dnd.highlighted().is_none());
    }

    #[test]
    fn drop_on_mismatched_zone_is_ignored() {
        let mut dnd = DragController::default();
        dnd.start(skill()).unwrap();
        assert_eq!(
            dnd.drop_on(&DropZone::assignment("ati", Kind::Service)),
            DropAction::Ignored
        );
    }

    #[test]
    fn zone_without_agent_is_ignored_and_flow_accepts_anything() {
        let mut dnd = DragController::default();
        dnd.start(skill()).unwrap();
        let orphan = DropZone {
            accepts: Accepts::Kind(Kind::Skill),
            agent_id: None,
        };
        assert_eq!(dnd.drop_on(&orphan), DropAction::Ignored);
        assert_eq!(dnd.drop_on(&DropZone::flow()), DropAction::AppendToFlow(skill()));
    }

    #[test]
    fn end_always_returns_to_idle() {
        let mut dnd = DragController::default();
        dnd.end();
        assert_eq!(dnd.state(), &DragState::Idle);

        dnd.start(skill()).unwrap();
        dnd.hover(&DropZone::flow());
        dnd.end();
        assert_eq!(dnd.state(), &DragState::Idle);
        assert!(dnd.token().is_none());
        assert_eq!(dnd.drop_on(&DropZone::flow()), DropAction::Ignored);
    }
}
