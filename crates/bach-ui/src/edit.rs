//! Edit form for a node's name and description.
//!
//! Experts additionally get one checkbox per skill; the toggles are applied
//! to `expertSkills` together with the name when the form is submitted.

use bach_core::{CoreError, HierarchyDocument, Kind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillToggle {
    pub skill_id: String,
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub kind: Kind,
    pub id: String,
    pub name: String,
    pub description: String,
    /// Present only for experts.
    pub skills: Option<Vec<SkillToggle>>,
}

impl EditForm {
    /// Open the form pre-filled from the current node.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] when the node does not exist.
    pub fn open(document: &HierarchyDocument, kind: Kind, id: &str) -> Result<Self, CoreError> {
        let node = document.find(kind, id).ok_or_else(|| CoreError::NotFound {
            kind,
            id: id.to_string(),
        })?;

        let skills = (kind == Kind::Expert).then(|| {
            let assigned = document.expert_skill_ids(id);
            document
                .nodes(Kind::Skill)
                .iter()
                .map(|skill| SkillToggle {
                    skill_id: skill.id.clone(),
                    label: skill.display_name().to_string(),
                    checked: assigned.contains(&skill.id),
                })
                .collect()
        });

        Ok(Self {
            kind,
            id: node.id.clone(),
            name: node.name.clone(),
            description: node.description.clone(),
            skills,
        })
    }

    /// Check or uncheck a skill; returns `false` when the form has no such checkbox.
    pub fn toggle_skill(&mut self, skill_id: &str, checked: bool) -> bool {
        let Some(toggle) = self
            .skills
            .iter_mut()
            .flatten()
            .find(|toggle| toggle.skill_id == skill_id)
        else {
            return false;
        };
        toggle.checked = checked;
        true
    }

    /// Local check run before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a blank name.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("Name is required".into()));
        }
        Ok(())
    }

    /// Write the form into the document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a blank name (the document is
    /// untouched) and [`CoreError::NotFound`] when the node was removed.
    pub fn apply(&self, document: &mut HierarchyDocument) -> Result<(), CoreError> {
        self.validate()?;
        document.update_node(self.kind, &self.id, &self.name, &self.description)?;
        for toggle in self.skills.iter().flatten() {
            document.set_expert_skill(&self.id, &toggle.skill_id, toggle.checked);
        }
        Ok(())
    }
}
