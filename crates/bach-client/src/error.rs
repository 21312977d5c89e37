//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the BACH server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The server answered 2xx with `{"success": false, "error": ...}`.
    #[error("request rejected: {0}")]
    Application(String),

    /// Failed to parse a server response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// Whether the failure happened below the application layer
    /// (transport or non-2xx status), as opposed to a rejected request.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Api { .. })
    }
}
