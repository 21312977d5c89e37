//! `GET /api/status`.

use bach_core::responses::StatusResponse;

use crate::{BachClient, ClientError};

impl BachClient {
    /// Server status and the dashboard counters.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the server is unreachable or answers with a
    /// non-success status.
    pub async fn status(&self) -> Result<StatusResponse, ClientError> {
        self.get_raw("/api/status").await
    }
}
