use bach_ui::nav::{self, ALL_PAGES};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FavoritesCommands;
use crate::context::AppContext;
use crate::output::{output, output_with_text};

#[derive(Serialize)]
struct NavEntry {
    label: &'static str,
    href: &'static str,
    active: bool,
}

#[derive(Serialize)]
struct Toggled<'a> {
    href: &'a str,
    favorite: bool,
}

/// Handle `bach favorites`. Only touches local preferences.
pub fn handle(action: &FavoritesCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FavoritesCommands::List => output(&nav::favorite_pages(&ctx.prefs), flags.format),
        FavoritesCommands::Pages => output(&ALL_PAGES, flags.format),
        FavoritesCommands::Toggle { href } => {
            anyhow::ensure!(nav::find_page(href).is_some(), "unknown page: {href}");
            let favorite = nav::toggle_favorite(&mut ctx.prefs, href)?;
            output(&Toggled { href, favorite }, flags.format)
        }
        FavoritesCommands::Nav { path } => {
            let entries: Vec<NavEntry> = nav::nav_for(path)
                .into_iter()
                .map(|(item, active)| NavEntry {
                    label: item.label,
                    href: item.href,
                    active,
                })
                .collect();
            output_with_text(
                &entries,
                || {
                    entries
                        .iter()
                        .map(|entry| {
                            if entry.active {
                                format!("[{}]", entry.label)
                            } else {
                                entry.label.to_string()
                            }
                        })
                        .collect::<Vec<_>>()
                        .join("  ")
                },
                flags.format,
            )
        }
    }
}
