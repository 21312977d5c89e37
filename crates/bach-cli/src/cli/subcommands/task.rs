use bach_core::TaskPriority;
use clap::Subcommand;

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks.
    List {
        /// Only tasks with this status (pending, open, in_progress, done).
        #[arg(long)]
        status: Option<String>,
    },
    /// Get a task by ID.
    Get { id: i64 },
    /// Create a task.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "P3")]
        priority: TaskPriority,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        project: Option<String>,
    },
    /// Update a task.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<TaskPriority>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        assigned_to: Option<String>,
    },
    /// Delete a task.
    Delete { id: i64 },
}
