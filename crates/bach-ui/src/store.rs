//! The in-memory hierarchy document and its persistence cycle.
//!
//! The document is fetched whole, mutated locally, and written back whole.
//! Concurrent writers are not detected; the last save wins.

use bach_core::{AssignOutcome, CoreError, HierarchyDocument, Kind, Node};

use crate::backend::BoardBackend;
use crate::error::BoardError;

/// Where the current document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Server,
    /// The fetch failed and the empty skeleton was substituted.
    Fallback,
}

#[derive(Debug)]
pub struct HierarchyStore<B> {
    backend: B,
    document: HierarchyDocument,
    /// Set while the document is the substituted skeleton.
    fallback: bool,
}

impl<B: BoardBackend> HierarchyStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            document: HierarchyDocument::default(),
            fallback: false,
        }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub const fn document(&self) -> &HierarchyDocument {
        &self.document
    }

    /// Fetch the document, substituting the empty skeleton on any failure.
    pub async fn load(&mut self) -> LoadSource {
        match self.backend.fetch_hierarchy().await {
            Ok(document) => {
                self.document = document;
                self.fallback = false;
                LoadSource::Server
            }
            Err(error) => {
                tracing::warn!(%error, "hierarchy unavailable, using empty skeleton");
                self.document = HierarchyDocument::default();
                self.fallback = true;
                LoadSource::Fallback
            }
        }
    }

    /// Write the whole document back.
    ///
    /// On failure the in-memory document is left as is, so the next save
    /// sends the same changes plus any made since. Nothing is written while
    /// the document is the fallback skeleton; a successful [`Self::load`]
    /// lifts that.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotLoaded`] after a failed load and
    /// [`BoardError::Client`] when the write is not accepted.
    pub async fn save(&self) -> Result<(), BoardError> {
        if self.fallback {
            return Err(BoardError::NotLoaded);
        }
        self.backend.put_hierarchy(&self.document).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotAssignable`] for agent nodes.
    pub fn assign(&mut self, agent_id: &str, kind: Kind, node_id: &str) -> Result<AssignOutcome, CoreError> {
        self.document.assign(agent_id, kind, node_id)
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotAssignable`] for agent nodes.
    pub fn unassign(&mut self, agent_id: &str, kind: Kind, node_id: &str) -> Result<bool, CoreError> {
        self.document.unassign(agent_id, kind, node_id)
    }

    pub fn set_expert_skill(&mut self, expert_id: &str, skill_id: &str, present: bool) -> bool {
        self.document.set_expert_skill(expert_id, skill_id, present)
    }

    /// # Errors
    ///
    /// See [`HierarchyDocument::update_node`].
    pub fn update_node(
        &mut self,
        kind: Kind,
        id: &str,
        name: &str,
        description: &str,
    ) -> Result<(), CoreError> {
        self.document.update_node(kind, id, name, description)
    }

    pub fn add_workflow(&mut self, node: Node) {
        self.document.add_workflow(node);
    }

    /// Direct access for multi-step edits that are saved together.
    pub const fn document_mut(&mut self) -> &mut HierarchyDocument {
        &mut self.document
    }
}
