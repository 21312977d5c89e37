use clap::Subcommand;

/// Message commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MessageCommands {
    /// List messages.
    List,
    /// Send a message.
    Send {
        /// Recipient (agent or partner name).
        #[arg(long)]
        to: String,
        #[arg(long)]
        subject: Option<String>,
        body: String,
        #[arg(long, default_value_t = 0)]
        priority: i32,
    },
    /// Mark a message read.
    Read { id: i64 },
}
