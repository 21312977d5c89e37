//! Task endpoints: `/api/tasks[/:id]` and `/api/scanned-tasks`.

use bach_core::entities::{NewTask, Task, TaskUpdate};
use bach_core::responses::{ActionResult, Created, ScannedTaskList, TaskList};
use reqwest::Method;
use serde::Deserialize;

use crate::{BachClient, ClientError, with_query};

#[derive(Deserialize)]
struct TaskEnvelope {
    task: Task,
}

impl BachClient {
    /// List tasks, optionally filtered by status (`pending`, `open`, `done`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-success status, or
    /// a `{"success": false}` body.
    pub async fn list_tasks(&self, status: Option<&str>) -> Result<TaskList, ClientError> {
        self.get_json(&with_query("/api/tasks", &[("status", status)]))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 when the task does not exist.
    pub async fn get_task(&self, id: i64) -> Result<Task, ClientError> {
        let envelope: TaskEnvelope = self.get_json(&format!("/api/tasks/{id}")).await?;
        Ok(envelope.task)
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the server rejects the task.
    pub async fn create_task(&self, task: &NewTask) -> Result<Created, ClientError> {
        tracing::debug!(title = %task.title, priority = %task.priority, "creating task");
        self.send_json(Method::POST, "/api/tasks", Some(task)).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the server rejects the update.
    pub async fn update_task(&self, id: i64, update: &TaskUpdate) -> Result<ActionResult, ClientError> {
        self.send_json(Method::PUT, &format!("/api/tasks/{id}"), Some(update))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the server rejects the deletion.
    pub async fn delete_task(&self, id: i64) -> Result<ActionResult, ClientError> {
        self.send_json::<(), _>(Method::DELETE, &format!("/api/tasks/{id}"), None)
            .await
    }

    /// Tasks found by the scanner, optionally filtered by tool and status.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn scanned_tasks(
        &self,
        tool: Option<&str>,
        status: Option<&str>,
    ) -> Result<ScannedTaskList, ClientError> {
        self.get_json(&with_query(
            "/api/scanned-tasks",
            &[("tool", tool), ("status", status)],
        ))
        .await
    }
}
