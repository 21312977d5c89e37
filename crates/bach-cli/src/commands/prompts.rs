use bach_ui::Dashboard;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PromptsCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `bach prompts`.
pub async fn handle(action: &PromptsCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        PromptsCommands::Start => {
            let mut dashboard = Dashboard::new(ctx.client.clone(), ctx.config.dashboard.clone());
            let message = dashboard.start_prompt_manager().await?;
            output(&message, flags.format)
        }
    }
}
