//! Scanner endpoints under `/api/scanner`.

use bach_core::responses::{ActionResult, ScannerStatus, ToolList};
use reqwest::Method;
use serde_json::Value;

use crate::{BachClient, ClientError};

impl BachClient {
    /// Start a scanner run.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Application`] when the server refuses to start the scan.
    pub async fn run_scanner(&self) -> Result<ActionResult, ClientError> {
        self.send_json::<(), _>(Method::POST, "/api/scanner/run", None)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn scanner_status(&self) -> Result<ScannerStatus, ClientError> {
        self.get_json("/api/scanner/status").await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn scanner_tools(&self) -> Result<ToolList, ClientError> {
        self.get_json("/api/scanner/tools").await
    }

    /// Scanner configuration as served; its shape is owned by the server.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn scanner_config(&self) -> Result<Value, ClientError> {
        self.get_json("/api/scanner/config").await
    }
}
