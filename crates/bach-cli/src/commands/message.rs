use bach_core::entities::NewMessage;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MessageCommands;
use crate::commands::ensure_success;
use crate::context::AppContext;
use crate::output::output;

/// Handle `bach message`.
pub async fn handle(action: &MessageCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        MessageCommands::List => output(&ctx.client.list_messages().await?.messages, flags.format),
        MessageCommands::Send {
            to,
            subject,
            body,
            priority,
        } => {
            let message = NewMessage {
                recipient: to.clone(),
                subject: subject.clone(),
                body: body.clone(),
                priority: *priority,
            };
            output(&ctx.client.send_message(&message).await?, flags.format)
        }
        MessageCommands::Read { id } => {
            let result = ensure_success(ctx.client.mark_message_read(*id).await?, "mark read")?;
            output(&result, flags.format)
        }
    }
}
