use bach_core::{AssignOutcome, Kind};
use bach_ui::DropZone;
use bach_ui::board::DropOutcome;
use serde::Serialize;

use super::Board;
use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct Assignment<'a> {
    agent: &'a str,
    kind: Kind,
    id: &'a str,
    changed: bool,
}

/// Assign through the same drag-and-drop path the board uses.
pub async fn run(board: &mut Board, agent: &str, kind: Kind, id: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    super::require_agent(board, agent)?;
    board.drag_start(kind, id)?;
    let zone = DropZone::assignment(agent, kind);
    if !board.drag_over(&zone) {
        board.drag_end();
        anyhow::bail!("{} cannot be assigned to an agent", kind.label());
    }
    let outcome = board.drop_on(&zone).await;
    board.drag_end();

    let changed = matches!(outcome?, DropOutcome::Assigned(AssignOutcome::Assigned));
    output(
        &Assignment {
            agent,
            kind,
            id,
            changed,
        },
        flags.format,
    )
}

pub async fn remove(board: &mut Board, agent: &str, kind: Kind, id: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    super::require_agent(board, agent)?;
    let changed = board.remove_assignment(agent, kind, id).await?;
    output(
        &Assignment {
            agent,
            kind,
            id,
            changed,
        },
        flags.format,
    )
}
