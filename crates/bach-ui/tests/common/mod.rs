//! In-memory stand-ins for the BACH server.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use bach_client::ClientError;
use bach_core::entities::{NewTask, Task};
use bach_core::responses::{ActionResult, ItemFileResponse, ScannedTaskList, StatusResponse, TaskList};
use bach_core::{HierarchyDocument, Kind};
use bach_ui::{BoardBackend, DashboardSource};

fn unavailable() -> ClientError {
    ClientError::Api {
        status: 503,
        message: "Service Unavailable".into(),
    }
}

#[derive(Debug, Default)]
pub struct BoardState {
    /// `None` makes the hierarchy fetch fail.
    pub document: Option<HierarchyDocument>,
    pub saved: Vec<HierarchyDocument>,
    pub fail_saves: bool,
    pub item_files: HashMap<(Kind, String), ItemFileResponse>,
    pub item_fetches: usize,
    pub written_files: Vec<(String, String)>,
    pub tasks: Vec<NewTask>,
}

/// Cloneable handle; tests keep one clone to inspect what the board sent.
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<BoardState>>,
}

impl FakeBackend {
    pub fn with_document(value: serde_json::Value) -> Self {
        let backend = Self::default();
        backend.state().document = Some(serde_json::from_value(value).expect("valid document"));
        backend
    }

    pub fn state(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().expect("fake backend lock")
    }

    pub fn last_saved(&self) -> Option<HierarchyDocument> {
        self.state().saved.last().cloned()
    }

    pub fn save_count(&self) -> usize {
        self.state().saved.len()
    }
}

impl BoardBackend for FakeBackend {
    async fn fetch_hierarchy(&self) -> Result<HierarchyDocument, ClientError> {
        self.state().document.clone().ok_or_else(unavailable)
    }

    async fn put_hierarchy(&self, document: &HierarchyDocument) -> Result<(), ClientError> {
        let mut state = self.state();
        if state.fail_saves {
            return Err(unavailable());
        }
        state.saved.push(document.clone());
        Ok(())
    }

    async fn fetch_item_file(
        &self,
        kind: Kind,
        id: &str,
        _description: &str,
    ) -> Result<ItemFileResponse, ClientError> {
        let mut state = self.state();
        state.item_fetches += 1;
        Ok(state
            .item_files
            .get(&(kind, id.to_string()))
            .cloned()
            .unwrap_or_else(|| ItemFileResponse {
                success: false,
                error: Some("no source file".into()),
                ..ItemFileResponse::default()
            }))
    }

    async fn put_item_file(&self, path: &str, content: &str) -> Result<(), ClientError> {
        self.state()
            .written_files
            .push((path.to_string(), content.to_string()));
        Ok(())
    }

    async fn create_task(&self, task: &NewTask) -> Result<(), ClientError> {
        self.state().tasks.push(task.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct SourceState {
    /// `None` makes the status call fail.
    pub status: Option<StatusResponse>,
    /// Tasks by status; a missing status makes the list call fail.
    pub tasks: HashMap<String, Vec<Task>>,
    pub scanned: usize,
    pub prompts: Vec<(String, String)>,
    pub status_calls: usize,
}

#[derive(Debug, Clone, Default)]
pub struct FakeSource {
    state: Arc<Mutex<SourceState>>,
}

impl FakeSource {
    pub fn state(&self) -> MutexGuard<'_, SourceState> {
        self.state.lock().expect("fake source lock")
    }
}

pub fn task(id: i64, title: &str, priority: &str) -> Task {
    serde_json::from_value(serde_json::json!({"id": id, "title": title, "priority": priority}))
        .expect("valid task")
}

impl DashboardSource for FakeSource {
    async fn status(&self) -> Result<StatusResponse, ClientError> {
        let mut state = self.state();
        state.status_calls += 1;
        state.status.clone().ok_or_else(unavailable)
    }

    async fn tasks(&self, status: &str) -> Result<TaskList, ClientError> {
        let state = self.state();
        let tasks = state.tasks.get(status).cloned().ok_or_else(unavailable)?;
        Ok(TaskList {
            count: tasks.len(),
            tasks,
        })
    }

    async fn run_scanner(&self) -> Result<ActionResult, ClientError> {
        Ok(ActionResult::default())
    }

    async fn scanned_tasks(&self) -> Result<ScannedTaskList, ClientError> {
        Ok(ScannedTaskList {
            tasks: Vec::new(),
            count: self.state().scanned,
        })
    }

    async fn run_headless(&self, prompt: &str, partner: &str) -> Result<ActionResult, ClientError> {
        if prompt == "reject me" {
            return Err(ClientError::Application("partner offline".into()));
        }
        self.state()
            .prompts
            .push((prompt.to_string(), partner.to_string()));
        Ok(ActionResult::default())
    }

    async fn start_prompt_manager(&self) -> Result<ActionResult, ClientError> {
        Ok(ActionResult {
            message: Some("started".into()),
            ..ActionResult::default()
        })
    }
}
