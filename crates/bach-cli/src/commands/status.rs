use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `bach status`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = with_spinner("Contacting BACH", ctx.client.status()).await?;
    output(&status, flags.format)
}
