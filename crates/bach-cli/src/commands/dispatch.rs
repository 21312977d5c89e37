use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Status => commands::status::handle(ctx, flags).await,
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags).await,
        Commands::Task { action } => commands::task::handle(&action, ctx, flags).await,
        Commands::Scanned(args) => commands::scanned::handle(&args, ctx, flags).await,
        Commands::Message { action } => commands::message::handle(&action, ctx, flags).await,
        Commands::Daemon { action } => commands::daemon::handle(&action, ctx, flags).await,
        Commands::Scanner { action } => commands::scanner::handle(&action, ctx, flags).await,
        Commands::Agent { action } => commands::agent::handle(&action, ctx, flags).await,
        Commands::Board { action } => commands::board::handle(&action, ctx, flags).await,
        Commands::Favorites { action } => commands::favorites::handle(&action, ctx, flags),
        Commands::Ai(args) => commands::ai::handle(&args, ctx, flags).await,
        Commands::Prompts { action } => commands::prompts::handle(&action, ctx, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
