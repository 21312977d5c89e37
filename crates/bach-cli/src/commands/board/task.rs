use bach_core::TaskPriority;

use super::Board;
use crate::cli::GlobalFlags;
use crate::output::output;

pub async fn run(
    board: &mut Board,
    agent: &str,
    description: &str,
    priority: TaskPriority,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    super::require_agent(board, agent)?;
    let task = board.submit_agent_task(agent, description, priority).await?;
    output(&task, flags.format)
}
