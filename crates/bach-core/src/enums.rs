//! Kinds of hierarchy nodes and task priorities.
//!
//! All enums use lowercase serialization so they match the JSON written by
//! the BACH server and the `data-type` values used by the board.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

/// The kind a hierarchy node belongs to.
///
/// Variant order is the display order: `agent < expert < skill < service < workflow`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Agent,
    Expert,
    Skill,
    Service,
    Workflow,
}

impl Kind {
    /// Every kind in display order.
    pub const ALL: [Self; 5] = [
        Self::Agent,
        Self::Expert,
        Self::Skill,
        Self::Service,
        Self::Workflow,
    ];

    /// Kinds that can be assigned to an agent, in the order they are listed.
    pub const ASSIGNABLE: [Self; 4] = [Self::Expert, Self::Skill, Self::Service, Self::Workflow];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Expert => "expert",
            Self::Skill => "skill",
            Self::Service => "service",
            Self::Workflow => "workflow",
        }
    }

    /// Key of this kind's sequence in `items` and in an agent's assignments.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Agent => "agents",
            Self::Expert => "experts",
            Self::Skill => "skills",
            Self::Service => "services",
            Self::Workflow => "workflows",
        }
    }

    /// Resolve a plural document key (`"skills"`) back to its kind.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownKind`] for anything else.
    pub fn from_plural(key: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.plural() == key)
            .ok_or_else(|| CoreError::UnknownKind(key.to_string()))
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Agent => "Agent",
            Self::Expert => "Expert",
            Self::Skill => "Skill",
            Self::Service => "Service",
            Self::Workflow => "Workflow",
        }
    }

    /// Header label of the tree section listing this kind.
    #[must_use]
    pub const fn section_label(self) -> &'static str {
        match self {
            Self::Agent => "Agents",
            Self::Expert => "Experts",
            Self::Skill => "Skills",
            Self::Service => "Services",
            Self::Workflow => "Workflows",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Agent => "🤖",
            Self::Expert => "🧠",
            Self::Skill => "⚡",
            Self::Service => "🔧",
            Self::Workflow => "📋",
        }
    }

    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Agent => "#e74c3c",
            Self::Expert => "#27ae60",
            Self::Skill => "#3498db",
            Self::Service => "#2980b9",
            Self::Workflow => "#9b59b6",
        }
    }

    /// One-based display order.
    #[must_use]
    pub const fn order(self) -> u8 {
        match self {
            Self::Agent => 1,
            Self::Expert => 2,
            Self::Skill => 3,
            Self::Service => 4,
            Self::Workflow => 5,
        }
    }

    #[must_use]
    pub const fn is_assignable(self) -> bool {
        !matches!(self, Self::Agent)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = CoreError;

    /// Accepts the singular (`skill`) or plural (`skills`) form, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered || kind.plural() == lowered)
            .ok_or_else(|| CoreError::UnknownKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// TaskPriority
// ---------------------------------------------------------------------------

/// Task priority as used by the BACH task board.
///
/// ```text
/// P1 critical → P2 high → P3 normal → P4 low
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    JsonSchema,
)]
pub enum TaskPriority {
    P1,
    P2,
    #[default]
    P3,
    P4,
}

impl TaskPriority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::P1 => "P1 - Critical",
            Self::P2 => "P2 - High",
            Self::P3 => "P3 - Normal",
            Self::P4 => "P4 - Low",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "P1" => Ok(Self::P1),
            "P2" => Ok(Self::P2),
            "P3" => Ok(Self::P3),
            "P4" => Ok(Self::P4),
            _ => Err(CoreError::Validation(format!(
                "priority must be one of P1, P2, P3, P4 (got '{s}')"
            ))),
        }
    }
}
