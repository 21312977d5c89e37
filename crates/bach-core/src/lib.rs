//! # bach-core
//!
//! Core types, hierarchy document model, and error types for BACH clients.
//!
//! This crate provides the foundational types shared across all BACH crates:
//! - The skills-board hierarchy document and its in-memory mutations
//! - `Kind` with its display metadata (icon, label, order)
//! - Entity structs for tasks, messages, daemon jobs, agents, scanned tasks
//! - REST response envelopes
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod hierarchy;
pub mod responses;
pub mod serde_util;

pub use enums::{Kind, TaskPriority};
pub use errors::CoreError;
pub use hierarchy::{AgentAssignments, AssignOutcome, HierarchyDocument, HierarchyItems, Node, StepRef};
