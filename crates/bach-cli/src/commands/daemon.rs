use bach_core::entities::NewDaemonJob;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DaemonCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `bach daemon`.
pub async fn handle(action: &DaemonCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = &ctx.client;
    match action {
        DaemonCommands::Jobs => output(&client.list_jobs().await?.jobs, flags.format),
        DaemonCommands::CreateJob {
            name,
            description,
            job_type,
            schedule,
            command,
            script_path,
            arguments,
        } => {
            let job = NewDaemonJob {
                name: name.clone(),
                description: description.clone(),
                job_type: job_type.clone(),
                schedule: schedule.clone(),
                command: command.clone(),
                script_path: script_path.clone(),
                arguments: arguments.clone(),
            };
            output(&client.create_job(&job).await?, flags.format)
        }
        DaemonCommands::Toggle { id } => output(&client.toggle_job(*id).await?, flags.format),
        DaemonCommands::Runs { job } => output(&client.list_runs(*job).await?.runs, flags.format),
    }
}
