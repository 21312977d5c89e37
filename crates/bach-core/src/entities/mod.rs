//! Entity structs for the records served by the BACH REST API.
//!
//! The server returns SQLite rows more or less verbatim, so every entity
//! keeps the columns it does not model in an `extra` map.

mod agent;
mod daemon;
mod message;
mod scanner;
mod task;

pub use agent::{Agent, AgentDraft};
pub use daemon::{DaemonJob, DaemonRun, NewDaemonJob};
pub use message::{Message, NewMessage};
pub use scanner::{ScanTool, ScannedTask};
pub use task::{NewTask, Task, TaskUpdate};
