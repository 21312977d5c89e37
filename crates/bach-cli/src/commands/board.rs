mod assign;
mod edit;
mod flow;
mod show;
mod source;
mod task;
mod tree;

use bach_client::BachClient;
use bach_core::Kind;
use bach_ui::{FilePreferences, LoadSource, SkillsBoard};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BoardCommands;
use crate::context::AppContext;
use crate::render;

type Board = SkillsBoard<BachClient, FilePreferences>;

/// Handle `bach board`.
pub async fn handle(action: &BoardCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        BoardCommands::Tree { search, kind } => {
            let mut board = open(ctx, false).await?;
            tree::run(&mut board, search.as_deref(), *kind, flags)
        }
        BoardCommands::Section { kind } => {
            let mut board = open(ctx, false).await?;
            tree::toggle_section(&mut board, *kind, flags)
        }
        BoardCommands::Expand { agent } => {
            let mut board = open(ctx, false).await?;
            tree::toggle_agent(&mut board, agent, flags)
        }
        BoardCommands::Show { kind, id, source } => {
            let mut board = open(ctx, false).await?;
            let result = show::run(&mut board, *kind, id, *source, flags).await;
            report(&mut board, flags);
            result
        }
        BoardCommands::Assign { agent, kind, id } => {
            let mut board = open(ctx, true).await?;
            let result = assign::run(&mut board, agent, *kind, id, flags).await;
            report(&mut board, flags);
            result
        }
        BoardCommands::Unassign { agent, kind, id } => {
            let mut board = open(ctx, true).await?;
            let result = assign::remove(&mut board, agent, *kind, id, flags).await;
            report(&mut board, flags);
            result
        }
        BoardCommands::Edit {
            kind,
            id,
            name,
            description,
            skills,
            no_skills,
        } => {
            let mut board = open(ctx, true).await?;
            let changes = edit::Changes {
                name: name.as_deref(),
                description: description.as_deref(),
                enable: skills,
                disable: no_skills,
            };
            let result = edit::run(&mut board, *kind, id, &changes, flags).await;
            report(&mut board, flags);
            result
        }
        BoardCommands::Source { kind, id, save } => {
            let mut board = open(ctx, save.is_some()).await?;
            let result = source::run(&mut board, *kind, id, save.as_deref(), flags).await;
            report(&mut board, flags);
            result
        }
        BoardCommands::Flow { steps, name } => {
            let mut board = open(ctx, name.is_some()).await?;
            let result = flow::run(&mut board, steps, name.as_deref(), flags).await;
            report(&mut board, flags);
            result
        }
        BoardCommands::Task {
            agent,
            description,
            priority,
        } => {
            let mut board = open(ctx, false).await?;
            let result = task::run(&mut board, agent, description, *priority, flags).await;
            report(&mut board, flags);
            result
        }
    }
}

/// Load the board. Commands that save the hierarchy refuse to run on the
/// fallback skeleton, since saving it would wipe the server's copy.
async fn open(ctx: &AppContext, writes: bool) -> anyhow::Result<Board> {
    let mut board = SkillsBoard::new(ctx.client.clone(), ctx.prefs.clone());
    if board.load().await == LoadSource::Fallback {
        anyhow::ensure!(!writes, "hierarchy could not be loaded from {}", ctx.config.server.base_url);
        tracing::warn!("hierarchy unavailable, showing the empty skeleton");
    }
    Ok(board)
}

/// Print the pending notification to stderr.
fn report(board: &mut Board, flags: &GlobalFlags) {
    if let Some(notification) = board.take_notification()
        && !flags.quiet
    {
        eprintln!("{}", render::notification(&notification));
    }
}

fn require_agent(board: &Board, agent_id: &str) -> anyhow::Result<()> {
    anyhow::ensure!(
        board.document().find(Kind::Agent, agent_id).is_some(),
        "unknown agent: {agent_id}"
    );
    Ok(())
}
