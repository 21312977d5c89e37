//! Error types for UI state operations.

use bach_client::ClientError;
use bach_core::CoreError;
use thiserror::Error;

/// Failure reading or writing the preference file.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preference file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of a skills-board or dashboard action.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Rejected locally before any request was made.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request reached the network and failed (transport, status, or
    /// `{"success": false}`).
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Prefs(#[from] PrefsError),

    /// The hierarchy was never loaded, so saving would overwrite the
    /// server's copy with the empty skeleton.
    #[error("hierarchy not loaded; reload before saving")]
    NotLoaded,
}

impl BoardError {
    /// Whether the action was blocked locally without touching the network.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::NotLoaded
                | Self::Core(CoreError::Validation(_) | CoreError::NotAssignable(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bach_core::Kind;

    #[test]
    fn local_errors_are_classified() {
        assert!(BoardError::Validation("Flow is empty".into()).is_local());
        assert!(BoardError::Core(CoreError::Validation("name is required".into())).is_local());
        assert!(BoardError::Core(CoreError::NotAssignable(Kind::Agent)).is_local());
        assert!(BoardError::NotLoaded.is_local());
        assert!(!BoardError::Client(ClientError::Application("nope".into())).is_local());
    }
}
