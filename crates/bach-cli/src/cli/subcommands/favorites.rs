use clap::Subcommand;

/// Favorites commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FavoritesCommands {
    /// List favorite pages.
    List,
    /// Add or remove a page.
    Toggle { href: String },
    /// Every page that can be pinned.
    Pages,
    /// Navigation bar with the active item for a path.
    Nav {
        #[arg(default_value = "/")]
        path: String,
    },
}
