use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A task discovered by the scanner from `/api/scanned-tasks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScannedTask {
    pub id: i64,
    #[serde(default)]
    pub tool_name: Option<String>,
    #[serde(default)]
    pub task_text: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A registered tool from `/api/scanner/tools`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScanTool {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub task_count: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
