use clap::Subcommand;

/// Scheduler commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DaemonCommands {
    /// List jobs.
    Jobs,
    /// Create a job.
    CreateJob {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "script")]
        job_type: String,
        /// Schedule expression, e.g. `interval:1h`.
        #[arg(long)]
        schedule: String,
        #[arg(long)]
        command: String,
        #[arg(long)]
        script_path: Option<String>,
        #[arg(long)]
        arguments: Option<String>,
    },
    /// Activate or deactivate a job.
    Toggle { id: i64 },
    /// List runs, optionally for one job.
    Runs {
        #[arg(long)]
        job: Option<i64>,
    },
}
