//! # bach-ui
//!
//! Headless UI state for the BACH dashboard and skills board.
//!
//! Every piece of interface state is an explicit value owned by a shell
//! object ([`SkillsBoard`], [`Dashboard`]). Views are projections of that
//! state ([`TreeView`], [`InfoView`], ...) rebuilt on demand, so "re-render"
//! means projecting again after a mutation. Rendering itself is left to the
//! front-end (the `bach` CLI renders text).
//!
//! Network access goes through the [`BoardBackend`] and [`DashboardSource`]
//! traits, implemented for [`bach_client::BachClient`].

pub mod backend;
pub mod board;
pub mod dashboard;
pub mod detail;
pub mod dnd;
pub mod edit;
pub mod error;
pub mod flow;
pub mod nav;
pub mod notify;
pub mod prefs;
pub mod store;
pub mod tree;

pub use backend::BoardBackend;
pub use board::SkillsBoard;
pub use dashboard::{Dashboard, DashboardSource};
pub use detail::{DetailPanel, InfoView, SourceState, Tab};
pub use dnd::{DragController, DragState, DragToken, DropAction, DropZone};
pub use edit::EditForm;
pub use error::{BoardError, PrefsError};
pub use flow::{FlowStep, TeamFlow};
pub use notify::{Level, Notification, Notifier};
pub use prefs::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use store::{HierarchyStore, LoadSource};
pub use tree::{Expansion, TreeState, TreeView, TypeFilter};
