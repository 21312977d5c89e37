use std::path::Path;

use anyhow::Context;
use bach_core::Kind;
use bach_ui::{SourceState, Tab};

use super::Board;
use crate::cli::GlobalFlags;
use crate::output::output_with_text;
use crate::render;

/// Print a node's source file, or replace it with a local file's contents.
pub async fn run(
    board: &mut Board,
    kind: Kind,
    id: &str,
    save: Option<&Path>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    anyhow::ensure!(board.select(kind, id), "no {} with id {id}", kind.label());
    let state = board.activate_tab(Tab::Source).await.clone();
    let SourceState::Found(file) = &state else {
        anyhow::bail!("{}", render::source(&state));
    };

    if let Some(path) = save {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        board.save_source(&content).await?;
        return Ok(());
    }
    output_with_text(file, || render::source(&state), flags.format)
}
