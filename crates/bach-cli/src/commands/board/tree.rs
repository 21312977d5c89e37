use bach_core::Kind;
use bach_ui::{Expansion, TypeFilter};
use serde::Serialize;

use super::Board;
use crate::cli::GlobalFlags;
use crate::output::{output, output_with_text};
use crate::render;

#[derive(Serialize)]
struct Toggled<'a> {
    target: &'a str,
    expansion: Expansion,
}

pub fn run(board: &mut Board, search: Option<&str>, kind: Option<Kind>, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(query) = search {
        board.set_search(query);
    }
    if let Some(kind) = kind {
        board.set_filter(TypeFilter::Only(kind));
    }
    let view = board.tree();
    output_with_text(&view, || render::tree(&view), flags.format)
}

/// Expansion state is stored in the preferences file, so it sticks for later `tree` runs.
pub fn toggle_section(board: &mut Board, kind: Kind, flags: &GlobalFlags) -> anyhow::Result<()> {
    let expansion = board.toggle_section(kind);
    output(
        &Toggled {
            target: kind.plural(),
            expansion,
        },
        flags.format,
    )
}

pub fn toggle_agent(board: &mut Board, agent: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    super::require_agent(board, agent)?;
    let expansion = board.toggle_agent(agent);
    output(
        &Toggled {
            target: agent,
            expansion,
        },
        flags.format,
    )
}
