//! Response envelopes returned by the BACH REST API.
//!
//! Most endpoints wrap their payload as `{success, <items>, count}` or return
//! `{success: false, error}` with a 2xx status. [`ActionResult`] models the
//! bare success/error shape; list envelopes default missing fields so a
//! partially filled response still parses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entities::{Agent, DaemonJob, DaemonRun, Message, ScanTool, ScannedTask, Task};
use crate::serde_util::null_as_default;

/// Generic `{success, error?, message?}` result of an action endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActionResult {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

const fn default_true() -> bool {
    true
}

/// A bare success, the same value an empty `{}` body parses to.
impl Default for ActionResult {
    fn default() -> Self {
        Self {
            success: true,
            error: None,
            message: None,
        }
    }
}

impl ActionResult {
    /// Error text of a failed action, with a generic fallback when the server sent none.
    #[must_use]
    pub fn failure(&self) -> Option<String> {
        if self.success {
            None
        } else {
            Some(
                self.error
                    .clone()
                    .unwrap_or_else(|| "request failed without an error message".to_string()),
            )
        }
    }
}

/// Counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Stats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks_open: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scanned_tasks: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub messages_unread: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub daemon_jobs_active: u64,
}

/// Response from `GET /api/status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub stats: Stats,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StatusResponse {
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.status == "online"
    }
}

/// Response from `GET /api/tasks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TaskList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub count: usize,
}

/// Response from `GET /api/scanned-tasks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScannedTaskList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<ScannedTask>,
    #[serde(default)]
    pub count: usize,
}

/// Response from `GET /api/messages`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MessageList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub count: usize,
}

/// Response from `GET /api/daemon/jobs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct JobList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub jobs: Vec<DaemonJob>,
    #[serde(default)]
    pub count: usize,
}

/// Response from `GET /api/daemon/runs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RunList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub runs: Vec<DaemonRun>,
    #[serde(default)]
    pub count: usize,
}

/// Response from `GET /api/agents`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AgentList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub agents: Vec<Agent>,
    #[serde(default)]
    pub count: usize,
}

/// Response from `GET /api/scanner/tools`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToolList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tools: Vec<ScanTool>,
    #[serde(default)]
    pub count: usize,
}

/// Response from `GET /api/scanner/status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScannerStatus {
    #[serde(default)]
    pub last_run: Option<Value>,
    #[serde(default)]
    pub total_tasks: u64,
    #[serde(default)]
    pub total_tools: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response from endpoints that create a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Created {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response from the toggle endpoints (`/api/agents/:id/toggle`, `/api/daemon/jobs/:id/toggle`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Toggled {
    #[serde(default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response from `GET /api/skills-board/item-file`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ItemFileResponse {
    pub success: bool,
    #[serde(default)]
    pub content: Option<String>,
    /// Path relative to the BACH root, for display.
    #[serde(default)]
    pub path: Option<String>,
    /// Opaque key the server expects back when saving.
    #[serde(default)]
    pub absolute_path: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
