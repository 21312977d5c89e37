use clap::Subcommand;

/// Scanner commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ScannerCommands {
    /// Start a scan.
    Run,
    /// Last run and totals.
    Status,
    /// Configured scan tools.
    Tools,
    /// Raw scanner configuration.
    Config,
}
