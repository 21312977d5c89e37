use bach_core::entities::AgentDraft;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AgentCommands;
use crate::commands::ensure_success;
use crate::context::AppContext;
use crate::output::output;

/// Handle `bach agent`.
pub async fn handle(action: &AgentCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = &ctx.client;
    match action {
        AgentCommands::List => output(&client.list_agents().await?.agents, flags.format),
        AgentCommands::Get { id } => output(&client.get_agent(*id).await?, flags.format),
        AgentCommands::Create {
            name,
            display_name,
            description,
        } => {
            let draft = AgentDraft {
                name: Some(name.clone()),
                display_name: display_name.clone(),
                description: description.clone(),
            };
            output(&client.create_agent(&draft).await?, flags.format)
        }
        AgentCommands::Update {
            id,
            name,
            display_name,
            description,
        } => {
            let draft = AgentDraft {
                name: name.clone(),
                display_name: display_name.clone(),
                description: description.clone(),
            };
            anyhow::ensure!(draft != AgentDraft::default(), "nothing to update; pass at least one field");
            let result = ensure_success(client.update_agent(*id, &draft).await?, "agent update")?;
            output(&result, flags.format)
        }
        AgentCommands::Delete { id } => {
            let result = ensure_success(client.delete_agent(*id).await?, "agent delete")?;
            output(&result, flags.format)
        }
        AgentCommands::Toggle { id } => output(&client.toggle_agent(*id).await?, flags.format),
    }
}
