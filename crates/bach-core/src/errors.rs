//! Cross-cutting error types for BACH.
//!
//! Domain-specific errors (`ClientError`, `ConfigError`, `BoardError`) live in
//! their respective crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

use crate::enums::Kind;

/// Errors that can be raised by any BACH crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Node lookup returned no result.
    #[error("{kind} not found: {id}")]
    NotFound { kind: Kind, id: String },

    /// A required field was empty or a value was out of range.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Only experts, skills, services and workflows can be assigned to agents.
    #[error("{0} cannot be assigned to an agent")]
    NotAssignable(Kind),

    /// A string did not name a known kind.
    #[error("unknown kind '{0}'")]
    UnknownKind(String),
}
