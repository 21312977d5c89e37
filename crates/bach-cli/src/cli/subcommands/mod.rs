mod agent;
mod board;
mod daemon;
mod favorites;
mod message;
mod prompts;
mod scanner;
mod task;

pub use agent::AgentCommands;
pub use board::BoardCommands;
pub use daemon::DaemonCommands;
pub use favorites::FavoritesCommands;
pub use message::MessageCommands;
pub use prompts::PromptsCommands;
pub use scanner::ScannerCommands;
pub use task::TaskCommands;
