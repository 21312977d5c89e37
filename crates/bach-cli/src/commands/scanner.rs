use crate::cli::GlobalFlags;
use crate::cli::subcommands::ScannerCommands;
use crate::commands::ensure_success;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `bach scanner`.
pub async fn handle(action: &ScannerCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = &ctx.client;
    match action {
        ScannerCommands::Run => {
            let result = with_spinner("Starting scanner", client.run_scanner()).await?;
            output(&ensure_success(result, "scanner run")?, flags.format)
        }
        ScannerCommands::Status => output(&client.scanner_status().await?, flags.format),
        ScannerCommands::Tools => output(&client.scanner_tools().await?.tools, flags.format),
        ScannerCommands::Config => output(&client.scanner_config().await?, flags.format),
    }
}
