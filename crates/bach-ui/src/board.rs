//! The skills-board shell.
//!
//! [`SkillsBoard`] owns the hierarchy store, preference store and every
//! piece of interface state, and exposes the user actions. Each action
//! mutates that state, persists when needed, and leaves a notification.
//! Views ([`TreeView`], [`InfoView`]) are projected fresh on request, so the
//! tree and the detail panel always reflect the last mutation.

use bach_core::entities::NewTask;
use bach_core::{AssignOutcome, CoreError, HierarchyDocument, Kind, TaskPriority};

use crate::backend::BoardBackend;
use crate::dashboard::truncate;
use crate::detail::{DetailPanel, InfoView, SourceFile, SourceState, Tab};
use crate::dnd::{DragController, DragToken, DropAction, DropZone};
use crate::edit::EditForm;
use crate::error::BoardError;
use crate::flow::TeamFlow;
use crate::notify::{Notification, Notifier};
use crate::prefs::PreferenceStore;
use crate::store::{HierarchyStore, LoadSource};
use crate::tree::{Expansion, TreeState, TreeView, TypeFilter};

/// Project attached to tasks created from an agent's detail panel.
pub const AGENT_TASK_PROJECT: &str = "agent-task";
const TASK_TITLE_CHARS: usize = 50;

/// Outcome of a drop, after the board acted on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Assigned(AssignOutcome),
    AddedToFlow,
    Ignored,
}

pub struct SkillsBoard<B, P> {
    store: HierarchyStore<B>,
    prefs: P,
    tree: TreeState,
    drag: DragController,
    detail: DetailPanel,
    flow: TeamFlow,
    editor: Option<EditForm>,
    notifier: Notifier,
}

impl<B: BoardBackend, P: PreferenceStore> SkillsBoard<B, P> {
    /// Build a board with expansion state restored from `prefs`. Call
    /// [`Self::load`] before use.
    pub fn new(backend: B, prefs: P) -> Self {
        let tree = TreeState::load(&prefs);
        Self {
            store: HierarchyStore::new(backend),
            prefs,
            tree,
            drag: DragController::default(),
            detail: DetailPanel::default(),
            flow: TeamFlow::default(),
            editor: None,
            notifier: Notifier::default(),
        }
    }

    /// Fetch the hierarchy; never fails (see [`HierarchyStore::load`]).
    pub async fn load(&mut self) -> LoadSource {
        let source = self.store.load().await;
        if source == LoadSource::Fallback {
            self.notifier.warning("Hierarchy unavailable, showing an empty board");
        }
        source
    }

    pub const fn document(&self) -> &HierarchyDocument {
        self.store.document()
    }

    pub const fn store(&self) -> &HierarchyStore<B> {
        &self.store
    }

    pub const fn prefs(&self) -> &P {
        &self.prefs
    }

    pub const fn tree_state(&self) -> &TreeState {
        &self.tree
    }

    pub const fn detail(&self) -> &DetailPanel {
        &self.detail
    }

    pub const fn drag(&self) -> &DragController {
        &self.drag
    }

    pub const fn flow(&self) -> &TeamFlow {
        &self.flow
    }

    pub const fn notification(&self) -> Option<&Notification> {
        self.notifier.current()
    }

    pub const fn take_notification(&mut self) -> Option<Notification> {
        self.notifier.take()
    }

    // -- tree ---------------------------------------------------------------

    pub fn tree(&self) -> TreeView {
        self.tree.project(self.store.document())
    }

    /// Flip a section. A preference write failure is reported but the
    /// section still flips for this session.
    pub fn toggle_section(&mut self, kind: Kind) -> Expansion {
        match self.tree.toggle_section(kind, &mut self.prefs) {
            Ok(expansion) => expansion,
            Err(error) => {
                tracing::warn!(%error, "could not persist section expansion");
                self.notifier.warning("Could not save the expanded sections");
                self.tree.stored_section(kind)
            }
        }
    }

    pub fn toggle_agent(&mut self, agent_id: &str) -> Expansion {
        match self.tree.toggle_agent(agent_id, &mut self.prefs) {
            Ok(expansion) => expansion,
            Err(error) => {
                tracing::warn!(%error, "could not persist agent expansion");
                self.notifier.warning("Could not save the expanded agents");
                self.tree.stored_agent(agent_id)
            }
        }
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.tree.set_search(query);
    }

    pub const fn set_filter(&mut self, filter: TypeFilter) {
        self.tree.set_filter(filter);
    }

    // -- selection and detail -----------------------------------------------

    /// Select a node; returns `false` (selection unchanged) when it does not exist.
    pub fn select(&mut self, kind: Kind, id: &str) -> bool {
        if self.store.document().find(kind, id).is_none() {
            return false;
        }
        self.detail.select(kind, id);
        true
    }

    pub fn info(&self) -> Option<InfoView> {
        self.detail
            .info(self.store.document(), self.flow.is_visible())
    }

    /// Switch the detail tab, fetching the source file on first activation.
    pub async fn activate_tab(&mut self, tab: Tab) -> &SourceState {
        if let Some(request) = self.detail.activate(tab, self.store.document()) {
            let result = self
                .store
                .backend()
                .fetch_item_file(request.kind, &request.id, &request.description)
                .await;
            if let Err(error) = &result {
                tracing::warn!(%error, id = %request.id, "source fetch failed");
                self.notifier.error("Failed to load the source file");
            }
            self.detail.apply_source(request.epoch, result);
        }
        self.detail.source()
    }

    /// Relative path of the loaded source file, for copying.
    pub fn source_path(&mut self) -> Option<String> {
        let path = self.detail.source_file()?.path.clone();
        self.notifier.info(format!("Path copied: {path}"));
        Some(path)
    }

    /// Overwrite the loaded source file.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when no source file is loaded and
    /// [`BoardError::Client`] when the server refuses the write.
    pub async fn save_source(&mut self, content: &str) -> Result<(), BoardError> {
        let Some(SourceFile { absolute_path, .. }) = self.detail.source_file().cloned() else {
            return Err(self.reject("No source file loaded"));
        };
        match self
            .store
            .backend()
            .put_item_file(&absolute_path, content)
            .await
        {
            Ok(()) => {
                self.detail.update_source_content(content);
                self.notifier.success("Source saved");
                Ok(())
            }
            Err(error) => {
                self.notifier.error(format!("Save failed: {error}"));
                Err(error.into())
            }
        }
    }

    // -- assignments --------------------------------------------------------

    /// Assign a node to an agent and persist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Core`] for agent nodes and [`BoardError::Client`]
    /// when the save fails; the assignment stays in memory in that case.
    pub async fn assign(
        &mut self,
        agent_id: &str,
        kind: Kind,
        node_id: &str,
    ) -> Result<AssignOutcome, BoardError> {
        let outcome = self.store.assign(agent_id, kind, node_id)?;
        if outcome == AssignOutcome::AlreadyAssigned {
            self.notifier.warning("Already assigned");
            return Ok(outcome);
        }
        self.persist("Assigned").await?;
        Ok(outcome)
    }

    /// Remove an assignment; removing something not assigned is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Client`] when the save fails.
    pub async fn remove_assignment(
        &mut self,
        agent_id: &str,
        kind: Kind,
        node_id: &str,
    ) -> Result<bool, BoardError> {
        if !self.store.unassign(agent_id, kind, node_id)? {
            return Ok(false);
        }
        self.persist("Removed").await?;
        Ok(true)
    }

    // -- drag and drop ------------------------------------------------------

    /// Start dragging a tree row.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Core`] when the node does not exist or is an agent.
    pub fn drag_start(&mut self, kind: Kind, id: &str) -> Result<(), BoardError> {
        let node = self
            .store
            .document()
            .find(kind, id)
            .ok_or_else(|| CoreError::NotFound {
                kind,
                id: id.to_string(),
            })?;
        self.drag.start(DragToken::from_node(kind, node))?;
        Ok(())
    }

    pub fn drag_over(&mut self, zone: &DropZone) -> bool {
        self.drag.hover(zone)
    }

    pub fn drag_leave(&mut self) {
        self.drag.leave();
    }

    /// Drop the dragged token on `zone` and act on it.
    ///
    /// # Errors
    ///
    /// Propagates failures of [`Self::assign`].
    pub async fn drop_on(&mut self, zone: &DropZone) -> Result<DropOutcome, BoardError> {
        match self.drag.drop_on(zone) {
            DropAction::Assign {
                agent_id,
                kind,
                node_id,
            } => Ok(DropOutcome::Assigned(
                self.assign(&agent_id, kind, &node_id).await?,
            )),
            DropAction::AppendToFlow(token) => {
                self.flow.push(token);
                self.notifier.success("Added to flow");
                Ok(DropOutcome::AddedToFlow)
            }
            DropAction::Ignored => Ok(DropOutcome::Ignored),
        }
    }

    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    // -- editing ------------------------------------------------------------

    /// Open the edit form for a node.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Core`] when the node does not exist.
    pub fn open_editor(&mut self, kind: Kind, id: &str) -> Result<&mut EditForm, BoardError> {
        match EditForm::open(self.store.document(), kind, id) {
            Ok(form) => Ok(self.editor.insert(form)),
            Err(error) => {
                self.notifier.error("Item not found");
                Err(error.into())
            }
        }
    }

    pub const fn editor_mut(&mut self) -> Option<&mut EditForm> {
        self.editor.as_mut()
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    /// Validate and apply the open form, then persist.
    ///
    /// The form stays open when validation or the save fails.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when no form is open or the name is
    /// blank, and [`BoardError::Client`] when the save fails.
    pub async fn submit_edit(&mut self) -> Result<(), BoardError> {
        let Some(form) = self.editor.as_ref() else {
            return Err(self.reject("No edit in progress"));
        };
        if let Err(CoreError::Validation(message)) = form.validate() {
            return Err(self.reject(message));
        }
        form.apply(self.store.document_mut())?;
        self.persist("Saved").await?;
        self.editor = None;
        Ok(())
    }

    // -- team flow ----------------------------------------------------------

    pub const fn toggle_flow_panel(&mut self) -> bool {
        self.flow.toggle_visible()
    }

    /// Append any node to the flow without a drag gesture.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Core`] when the node does not exist.
    pub fn add_to_flow(&mut self, kind: Kind, id: &str) -> Result<(), BoardError> {
        let node = self
            .store
            .document()
            .find(kind, id)
            .ok_or_else(|| CoreError::NotFound {
                kind,
                id: id.to_string(),
            })?;
        self.flow.push(DragToken::from_node(kind, node));
        self.notifier.success("Added to flow");
        Ok(())
    }

    pub fn remove_from_flow(&mut self, index: usize) -> bool {
        self.flow.remove(index).is_some()
    }

    pub fn clear_flow(&mut self) {
        self.flow.clear();
        self.notifier.success("Flow cleared");
    }

    /// Export the flow as a new workflow and persist. The buffer is cleared
    /// only once the save succeeded; returns the new workflow id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] for an empty flow or a blank name,
    /// and [`BoardError::Client`] when the save fails.
    pub async fn save_flow(&mut self, name: &str) -> Result<String, BoardError> {
        let stamp = chrono::Utc::now().timestamp_millis();
        let workflow = match self.flow.to_workflow(name, stamp) {
            Ok(workflow) => workflow,
            Err(CoreError::Validation(message)) => return Err(self.reject(message)),
            Err(error) => return Err(error.into()),
        };
        let id = workflow.id.clone();
        self.store.add_workflow(workflow);
        self.persist("Workflow saved").await?;
        self.flow.clear();
        Ok(id)
    }

    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when the flow is empty.
    pub fn execute_flow(&mut self) -> Result<String, BoardError> {
        match self.flow.execute() {
            Ok(summary) => {
                self.notifier.success(summary.clone());
                Ok(summary)
            }
            Err(error) => Err(self.reject(error_message(error))),
        }
    }

    // -- tasks --------------------------------------------------------------

    /// Create a task delegated to an agent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] for a blank description (nothing is
    /// sent) and [`BoardError::Client`] when the server rejects the task.
    pub async fn submit_agent_task(
        &mut self,
        agent_id: &str,
        description: &str,
        priority: TaskPriority,
    ) -> Result<NewTask, BoardError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(self.reject("Please enter a description"));
        }
        let agent_name = self
            .store
            .document()
            .find(Kind::Agent, agent_id)
            .map_or(agent_id, |agent| agent.display_name());
        let task = NewTask {
            title: format!("[{agent_name}] {}", truncate(description, TASK_TITLE_CHARS)),
            description: description.to_string(),
            priority,
            project: Some(AGENT_TASK_PROJECT.to_string()),
            delegated_to: Some(agent_id.to_string()),
            ..NewTask::default()
        };

        match self.store.backend().create_task(&task).await {
            Ok(()) => {
                self.notifier.success("Task created");
                Ok(task)
            }
            Err(error) => {
                self.notifier.error(format!("Task creation failed: {error}"));
                Err(error.into())
            }
        }
    }

    // -- helpers ------------------------------------------------------------

    async fn persist(&mut self, success: &str) -> Result<(), BoardError> {
        match self.store.save().await {
            Ok(()) => {
                self.notifier.success(success);
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "hierarchy save failed");
                self.notifier.error(format!("Save failed: {error}"));
                Err(error)
            }
        }
    }

    fn reject(&mut self, message: impl Into<String>) -> BoardError {
        let message = message.into();
        self.notifier.warning(message.clone());
        BoardError::Validation(message)
    }
}

fn error_message(error: CoreError) -> String {
    match error {
        CoreError::Validation(message) => message,
        other => other.to_string(),
    }
}

