use std::path::PathBuf;

use bach_core::{Kind, TaskPriority};
use clap::Subcommand;

/// Skills-board commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BoardCommands {
    /// Show the hierarchy tree.
    Tree {
        /// Case-insensitive name filter.
        #[arg(long)]
        search: Option<String>,
        /// Show a single kind.
        #[arg(long)]
        kind: Option<Kind>,
    },
    /// Expand or collapse a tree section.
    Section { kind: Kind },
    /// Expand or collapse an agent's nested assignments.
    Expand { agent: String },
    /// Show a node's detail panel.
    Show {
        kind: Kind,
        id: String,
        /// Also load the node's source file.
        #[arg(long)]
        source: bool,
    },
    /// Assign a node to an agent.
    Assign { agent: String, kind: Kind, id: String },
    /// Remove a node from an agent.
    Unassign { agent: String, kind: Kind, id: String },
    /// Rename or re-describe a node.
    Edit {
        kind: Kind,
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Skill to enable for an expert (repeatable).
        #[arg(long = "skill")]
        skills: Vec<String>,
        /// Skill to disable for an expert (repeatable).
        #[arg(long = "no-skill")]
        no_skills: Vec<String>,
    },
    /// Print a node's source file, or overwrite it.
    Source {
        kind: Kind,
        id: String,
        /// Replace the file with the contents of this local file.
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Build a team flow from `kind:id` steps; save it with --name.
    Flow {
        #[arg(required = true)]
        steps: Vec<String>,
        /// Save the flow as a workflow with this name.
        #[arg(long)]
        name: Option<String>,
    },
    /// Create a task delegated to an agent.
    Task {
        agent: String,
        description: String,
        #[arg(long, default_value = "P3")]
        priority: TaskPriority,
    },
}
