use clap::Subcommand;

/// Prompt manager commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PromptsCommands {
    /// Launch the desktop prompt manager.
    Start,
}
