use bach_core::Kind;
use bach_ui::Tab;

use super::Board;
use crate::cli::GlobalFlags;
use crate::output::output_with_text;
use crate::render;

pub async fn run(
    board: &mut Board,
    kind: Kind,
    id: &str,
    with_source: bool,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    anyhow::ensure!(board.select(kind, id), "no {} with id {id}", kind.label());
    let Some(info) = board.info() else {
        anyhow::bail!("no {} with id {id}", kind.label());
    };
    output_with_text(&info, || render::info(&info), flags.format)?;

    if with_source {
        let state = board.activate_tab(Tab::Source).await.clone();
        println!();
        println!("{}", render::source(&state));
    }
    Ok(())
}
