use std::time::Duration;

use bach_core::responses::Stats;
use bach_ui::Dashboard;
use bach_ui::dashboard::{DashboardSource, Indicator, RecentTask, TaskStats, Widget};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::context::AppContext;
use crate::output::output_with_text;
use crate::render;

#[derive(Debug, Serialize)]
struct DashboardSnapshot<'a> {
    indicator: Indicator,
    stats: &'a Widget<Stats>,
    recent_tasks: &'a Widget<Vec<RecentTask>>,
    task_stats: &'a Widget<TaskStats>,
    last_refresh: Option<String>,
}

impl<'a> DashboardSnapshot<'a> {
    fn of<S: DashboardSource>(dashboard: &'a Dashboard<S>) -> Self {
        Self {
            indicator: dashboard.indicator(),
            stats: dashboard.stats(),
            recent_tasks: dashboard.recent_tasks(),
            task_stats: dashboard.task_stats(),
            last_refresh: dashboard.last_refresh().map(|at| at.to_rfc3339()),
        }
    }
}

fn print<S: DashboardSource>(dashboard: &Dashboard<S>, flags: &GlobalFlags) -> anyhow::Result<()> {
    output_with_text(
        &DashboardSnapshot::of(dashboard),
        || render::dashboard(dashboard),
        flags.format,
    )
}

/// Handle `bach dashboard`.
pub async fn handle(args: &DashboardArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut dashboard = Dashboard::new(ctx.client.clone(), ctx.config.dashboard.clone());

    if !args.watch {
        dashboard.refresh().await;
        return print(&dashboard, flags);
    }

    let period = args
        .interval
        .map_or_else(|| dashboard.refresh_period(), Duration::from_secs);
    tracing::debug!(?period, cycles = ?args.cycles, "watching dashboard");

    dashboard
        .run_periodic(period, args.cycles, |dashboard| {
            if let Err(error) = print(dashboard, flags) {
                tracing::warn!(%error, "could not print dashboard");
            }
        })
        .await;
    Ok(())
}
