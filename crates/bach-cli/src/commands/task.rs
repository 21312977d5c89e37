use bach_core::entities::{NewTask, TaskUpdate};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::commands::ensure_success;
use crate::context::AppContext;
use crate::output::output;

/// Handle `bach task`.
pub async fn handle(action: &TaskCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = &ctx.client;
    match action {
        TaskCommands::List { status } => {
            let list = client.list_tasks(status.as_deref()).await?;
            output(&list.tasks, flags.format)
        }
        TaskCommands::Get { id } => output(&client.get_task(*id).await?, flags.format),
        TaskCommands::Create {
            title,
            description,
            priority,
            category,
            project,
        } => {
            let task = NewTask {
                title: title.clone(),
                description: description.clone().unwrap_or_default(),
                priority: *priority,
                category: category.clone(),
                project: project.clone(),
                ..NewTask::default()
            };
            output(&client.create_task(&task).await?, flags.format)
        }
        TaskCommands::Update {
            id,
            title,
            description,
            priority,
            status,
            category,
            assigned_to,
        } => {
            let update = TaskUpdate {
                title: title.clone(),
                description: description.clone(),
                priority: *priority,
                status: status.clone(),
                category: category.clone(),
                assigned_to: assigned_to.clone(),
            };
            anyhow::ensure!(!update.is_empty(), "nothing to update; pass at least one field");
            let result = ensure_success(client.update_task(*id, &update).await?, "task update")?;
            output(&result, flags.format)
        }
        TaskCommands::Delete { id } => {
            let result = ensure_success(client.delete_task(*id).await?, "task delete")?;
            output(&result, flags.format)
        }
    }
}
