use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScannedArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `bach scanned`.
pub async fn handle(args: &ScannedArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let list = ctx
        .client
        .scanned_tasks(args.tool.as_deref(), args.status.as_deref())
        .await?;
    output(&list.tasks, flags.format)
}
