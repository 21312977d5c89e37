use clap::Subcommand;

/// Agent record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AgentCommands {
    /// List agents.
    List,
    /// Get an agent by ID.
    Get { id: i64 },
    /// Create an agent.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        display_name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update an agent.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        display_name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an agent.
    Delete { id: i64 },
    /// Activate or deactivate an agent.
    Toggle { id: i64 },
}
