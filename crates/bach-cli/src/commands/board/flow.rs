use bach_core::Kind;
use serde::Serialize;

use super::Board;
use crate::cli::GlobalFlags;
use crate::output::{output, output_with_text};

#[derive(Serialize)]
struct SavedFlow {
    workflow_id: String,
    chain: String,
}

/// Split a `kind:id` step argument.
fn parse_step(step: &str) -> anyhow::Result<(Kind, &str)> {
    let Some((kind, id)) = step.split_once(':') else {
        anyhow::bail!("flow step must look like kind:id, got {step:?}");
    };
    anyhow::ensure!(!id.is_empty(), "flow step {step:?} has no id");
    Ok((kind.parse()?, id))
}

/// Build a flow from the steps, then save it as a workflow or just summarize it.
pub async fn run(board: &mut Board, steps: &[String], name: Option<&str>, flags: &GlobalFlags) -> anyhow::Result<()> {
    for step in steps {
        let (kind, id) = parse_step(step)?;
        board.add_to_flow(kind, id)?;
    }

    match name {
        Some(name) => {
            let chain = board.flow().chain();
            let workflow_id = board.save_flow(name).await?;
            output(&SavedFlow { workflow_id, chain }, flags.format)
        }
        None => {
            let steps = board.flow().steps().to_vec();
            let summary = board.execute_flow()?;
            output_with_text(&steps, || summary, flags.format)
        }
    }
}
