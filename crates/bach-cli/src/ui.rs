//! Terminal presentation settings resolved once from the global flags.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrower terminals fall back to unbounded table width.
const MIN_TABLE_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

/// What the process environment says about the terminal.
#[derive(Clone, Copy, Debug, Default)]
struct Terminal {
    is_tty: bool,
    no_color: bool,
    columns: Option<usize>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            is_tty: std::io::stdout().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS").ok().and_then(|value| value.parse().ok()),
        }
    }
}

impl UiPrefs {
    fn resolve(flags: &GlobalFlags, terminal: Terminal) -> Self {
        let table = flags.format == OutputFormat::Table;
        let interactive = terminal.is_tty && !flags.quiet;
        Self {
            table_color: table
                && match flags.color {
                    ColorMode::Always => true,
                    ColorMode::Never => false,
                    ColorMode::Auto => interactive && !terminal.no_color,
                },
            // Spinners would corrupt JSON piped to another tool.
            progress: interactive && flags.format != OutputFormat::Json,
            term_width: terminal.columns.filter(|width| *width >= MIN_TABLE_WIDTH),
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(UiPrefs::resolve(flags, Terminal::detect()));
}

/// Resolved settings; everything off before [`init`] ran.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn flags(format: OutputFormat, color: ColorMode, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet,
            verbose: false,
            color,
            server: None,
        }
    }

    const TTY: Terminal = Terminal {
        is_tty: true,
        no_color: false,
        columns: Some(120),
    };

    #[test]
    fn interactive_table_gets_color_and_spinner() {
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, ColorMode::Auto, false), TTY);
        assert_eq!(
            prefs,
            UiPrefs {
                table_color: true,
                progress: true,
                term_width: Some(120),
            }
        );
    }

    #[test]
    fn json_output_is_plain() {
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Json, ColorMode::Always, false), TTY);
        assert!(!prefs.table_color);
        assert!(!prefs.progress);
    }

    #[test]
    fn no_color_and_pipes_disable_auto_color() {
        let no_color = Terminal {
            no_color: true,
            ..TTY
        };
        let piped = Terminal {
            is_tty: false,
            ..TTY
        };
        let auto = flags(OutputFormat::Table, ColorMode::Auto, false);
        assert!(!UiPrefs::resolve(&auto, no_color).table_color);
        assert!(!UiPrefs::resolve(&auto, piped).table_color);
        assert!(UiPrefs::resolve(&flags(OutputFormat::Table, ColorMode::Always, false), piped).table_color);
    }

    #[test]
    fn tiny_terminals_are_ignored() {
        let narrow = Terminal {
            columns: Some(20),
            ..TTY
        };
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, ColorMode::Never, true), narrow);
        assert_eq!(prefs.term_width, None);
        assert!(!prefs.progress);
    }
}
