use bach_ui::Dashboard;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AiArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `bach ai`.
pub async fn handle(args: &AiArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut dashboard = Dashboard::new(ctx.client.clone(), ctx.config.dashboard.clone());
    with_spinner("Starting AI session", dashboard.send_prompt(&args.prompt, &args.partner)).await?;
    match dashboard.take_notification() {
        Some(notification) => output(&notification, flags.format),
        None => Ok(()),
    }
}
