use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{
    AgentCommands, BoardCommands, DaemonCommands, FavoritesCommands, MessageCommands,
    PromptsCommands, ScannerCommands, TaskCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Server status and counters.
    Status,
    /// Dashboard widgets, once or on a refresh timer.
    Dashboard(DashboardArgs),
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Tasks found by the scanner.
    Scanned(ScannedArgs),
    /// Messages.
    Message {
        #[command(subcommand)]
        action: MessageCommands,
    },
    /// Scheduler jobs and runs.
    Daemon {
        #[command(subcommand)]
        action: DaemonCommands,
    },
    /// Task scanner.
    Scanner {
        #[command(subcommand)]
        action: ScannerCommands,
    },
    /// Agent records.
    Agent {
        #[command(subcommand)]
        action: AgentCommands,
    },
    /// Skills board: hierarchy, assignments, team flows.
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },
    /// Dashboard favorites.
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommands,
    },
    /// Headless AI sessions.
    Ai(AiArgs),
    /// Desktop prompt manager.
    Prompts {
        #[command(subcommand)]
        action: PromptsCommands,
    },
    /// Dump JSON schema for a wire type.
    Schema(SchemaArgs),
}

/// Arguments for `bach dashboard`.
#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Keep refreshing on the configured interval.
    #[arg(long)]
    pub watch: bool,
    /// Stop after this many refreshes (with --watch).
    #[arg(long, requires = "watch")]
    pub cycles: Option<usize>,
    /// Refresh interval in seconds (defaults to dashboard.refresh_interval_secs).
    #[arg(long, requires = "watch", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,
}

/// Arguments for `bach scanned`.
#[derive(Clone, Debug, Args)]
pub struct ScannedArgs {
    #[arg(long)]
    pub tool: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
}

/// Arguments for `bach ai`.
#[derive(Clone, Debug, Args)]
pub struct AiArgs {
    /// Prompt text handed to the partner.
    pub prompt: String,
    /// Partner that runs the session.
    #[arg(long, default_value = bach_client::actions::DEFAULT_PARTNER)]
    pub partner: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Hierarchy,
    Task,
    NewTask,
    TaskUpdate,
    Message,
    NewMessage,
    DaemonJob,
    NewDaemonJob,
    Agent,
    AgentDraft,
    Status,
}

/// Arguments for `bach schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}
