//! Team-flow builder: an ordered scratch list exportable as a workflow.

use bach_core::{CoreError, Kind, Node, StepRef};
use serde::Serialize;

use crate::dnd::DragToken;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowStep {
    pub id: String,
    pub kind: Kind,
    pub name: String,
}

impl From<DragToken> for FlowStep {
    fn from(token: DragToken) -> Self {
        Self {
            id: token.id,
            kind: token.kind,
            name: token.name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeamFlow {
    steps: Vec<FlowStep>,
    visible: bool,
}

impl TeamFlow {
    #[must_use]
    pub fn steps(&self) -> &[FlowStep] {
        &self.steps
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn push(&mut self, step: impl Into<FlowStep>) {
        self.steps.push(step.into());
    }

    /// Remove the step at `index`; `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<FlowStep> {
        (index < self.steps.len()).then(|| self.steps.remove(index))
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub const fn toggle_visible(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Step names joined with arrows, e.g. `Ati → Scan`.
    #[must_use]
    pub fn chain(&self) -> String {
        self.steps
            .iter()
            .map(|step| step.name.as_str())
            .collect::<Vec<_>>()
            .join(" → ")
    }

    /// Build the workflow node for this flow without clearing the buffer.
    ///
    /// `stamp` makes the id unique (`workflow_<stamp>`); callers pass the
    /// current time in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the flow is empty or the name is blank.
    pub fn to_workflow(&self, name: &str, stamp: i64) -> Result<Node, CoreError> {
        if self.steps.is_empty() {
            return Err(CoreError::Validation("Flow is empty".into()));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("workflow name is required".into()));
        }
        let mut node = Node::new(format!("workflow_{stamp}"), name)
            .with_description(format!("Team-Flow: {}", self.chain()));
        node.steps = Some(
            self.steps
                .iter()
                .map(|step| StepRef::new(step.id.clone(), step.kind))
                .collect(),
        );
        Ok(node)
    }

    /// Execution is not dispatched anywhere; this only reports the step count.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the flow is empty.
    pub fn execute(&self) -> Result<String, CoreError> {
        if self.steps.is_empty() {
            return Err(CoreError::Validation("Flow is empty".into()));
        }
        Ok(format!("Flow with {} steps would run", self.steps.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn step(id: &str, kind: Kind, name: &str) -> FlowStep {
        FlowStep {
            id: id.into(),
            kind,
            name: name.into(),
        }
    }

    #[test]
    fn workflow_carries_chain_and_steps() {
        let mut flow = TeamFlow::default();
        flow.push(step("a1", Kind::Agent, "Ati"));
        flow.push(step("s1", Kind::Skill, "Scan"));

        let node = flow.to_workflow("Flow1", 1_700_000_000_000).unwrap();
        assert_eq!(node.id, "workflow_1700000000000");
        assert_eq!(node.name, "Flow1");
        assert!(node.description.contains("Ati → Scan"));
        assert_eq!(
            node.steps,
            Some(vec![
                StepRef::new("a1", Kind::Agent),
                StepRef::new("s1", Kind::Skill),
            ])
        );
    }

    #[test]
    fn export_requires_steps_and_name() {
        let mut flow = TeamFlow::default();
        assert!(matches!(flow.to_workflow("x", 1), Err(CoreError::Validation(_))));
        flow.push(step("s1", Kind::Skill, "Scan"));
        assert!(matches!(flow.to_workflow("  ", 1), Err(CoreError::Validation(_))));
    }

    #[test]
    fn remove_and_clear() {
        let mut flow = TeamFlow::default();
        flow.push(step("s1", Kind::Skill, "Scan"));
        flow.push(step("e1", Kind::Expert, "Report"));
        assert!(flow.remove(5).is_none());
        assert_eq!(flow.remove(0).map(|s| s.id), Some("s1".to_string()));
        assert_eq!(flow.chain(), "Report");
        flow.clear();
        assert!(flow.is_empty());
    }

    #[test]
    fn execute_reports_step_count() {
        let mut flow = TeamFlow::default();
        assert!(flow.execute().is_err());
        flow.push(step("s1", Kind::Skill, "Scan"));
        flow.push(step("s2", Kind::Skill, "Parse"));
        assert_eq!(flow.execute().unwrap(), "Flow with 2 steps would run");
    }
}
