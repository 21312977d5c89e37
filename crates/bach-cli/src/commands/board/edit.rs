use bach_core::Kind;

use super::Board;
use crate::cli::GlobalFlags;
use crate::output::output_with_text;
use crate::render;

pub struct Changes<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub enable: &'a [String],
    pub disable: &'a [String],
}

pub async fn run(board: &mut Board, kind: Kind, id: &str, changes: &Changes<'_>, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = board.open_editor(kind, id)?;
    if let Some(name) = changes.name {
        form.name = name.to_string();
    }
    if let Some(description) = changes.description {
        form.description = description.to_string();
    }
    let toggles = changes
        .enable
        .iter()
        .map(|skill| (skill, true))
        .chain(changes.disable.iter().map(|skill| (skill, false)));
    for (skill, checked) in toggles {
        anyhow::ensure!(
            form.toggle_skill(skill, checked),
            "{skill} is not a skill toggle on this form (only experts have skills)"
        );
    }
    board.submit_edit().await?;

    board.select(kind, id);
    let Some(info) = board.info() else {
        return Ok(());
    };
    output_with_text(&info, || render::info(&info), flags.format)
}
