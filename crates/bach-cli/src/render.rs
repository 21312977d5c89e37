//! Plain-text rendering of the bach-ui view models.

use std::fmt::Write as _;

use bach_ui::dashboard::{Dashboard, DashboardSource, Widget};
use bach_ui::detail::{InfoBody, InfoView, SourceState};
use bach_ui::flow::TeamFlow;
use bach_ui::notify::{Level, Notification};
use bach_ui::tree::TreeView;

/// The skills-board tree with chevrons, icons and assignment badges.
#[must_use]
pub fn tree(view: &TreeView) -> String {
    let mut out = String::new();
    for section in &view.sections {
        let _ = writeln!(
            out,
            "{} {} {} ({})",
            section.expansion.chevron(),
            section.icon,
            section.label,
            section.count
        );
        if !section.expansion.is_expanded() {
            continue;
        }
        for row in &section.rows {
            let chevron = row.expansion.map_or(" ", |expansion| expansion.chevron());
            let _ = write!(out, "  {chevron} {} {} [{}]", row.icon, row.label, row.id);
            if let Some(badge) = row.badge {
                let _ = write!(out, " ({badge})");
            }
            out.push('\n');
            if row.expansion.is_some_and(|expansion| expansion.is_expanded()) {
                for child in &row.children {
                    let _ = writeln!(out, "      {} {}", child.kind.icon(), child.label);
                }
            }
        }
    }
    out.trim_end().to_string()
}

/// The Info tab of the detail panel.
#[must_use]
pub fn info(view: &InfoView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {} ({}, {})", view.icon, view.title, view.kind_label, view.id);
    let _ = writeln!(out, "{}", view.description_text());

    match &view.body {
        InfoBody::Agent { sections, .. } => {
            for section in sections {
                let _ = writeln!(out, "\n{} {}", section.icon, section.label);
                if section.chips.is_empty() {
                    let _ = writeln!(out, "  (none assigned)");
                }
                for chip in &section.chips {
                    let _ = writeln!(out, "  - {} [{}]", chip.label, chip.id);
                }
            }
        }
        InfoBody::UsedBy(agents) => {
            let _ = writeln!(out, "\nUsed by");
            if agents.is_empty() {
                let _ = writeln!(out, "  (no agent)");
            }
            for agent in agents {
                let _ = writeln!(out, "  - {} [{}]", agent.label, agent.id);
            }
        }
    }
    out.trim_end().to_string()
}

#[must_use]
pub fn source(state: &SourceState) -> String {
    match state {
        SourceState::Found(file) => format!("# {}\n{}", file.path, file.content),
        SourceState::NotFound(reason) => format!(
            "No source file ({})",
            reason.as_deref().unwrap_or("not found")
        ),
        SourceState::Failed(error) => format!("Failed to load the source file: {error}"),
        SourceState::NotLoaded | SourceState::Loading => String::from("Loading..."),
    }
}

#[must_use]
pub fn flow(flow: &TeamFlow) -> String {
    if flow.is_empty() {
        return String::from("(empty flow)");
    }
    format!("{} step(s): {}", flow.len(), flow.chain())
}

#[must_use]
pub fn notification(notification: &Notification) -> String {
    let marker = match notification.level {
        Level::Success => "✓",
        Level::Info => "i",
        Level::Warning => "!",
        Level::Error => "✗",
    };
    format!("{marker} {}", notification.message)
}

fn widget<T>(widget: &Widget<T>, body: impl FnOnce(&T) -> String) -> String {
    match widget {
        Widget::Loading => String::from("  loading..."),
        Widget::Ready(value) => body(value),
        Widget::Failed(error) => format!("  Error loading: {error}"),
    }
}

/// All dashboard widgets as one text block.
#[must_use]
pub fn dashboard<S: DashboardSource>(dashboard: &Dashboard<S>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "BACH {}", dashboard.indicator().label());

    let _ = writeln!(
        out,
        "{}",
        widget(dashboard.stats(), |stats| format!(
            "  open tasks {}  scanned {}  unread {}  active jobs {}",
            stats.tasks_open, stats.scanned_tasks, stats.messages_unread, stats.daemon_jobs_active
        ))
    );

    let _ = writeln!(out, "\nRecent tasks");
    let _ = writeln!(
        out,
        "{}",
        widget(dashboard.recent_tasks(), |tasks| {
            if tasks.is_empty() {
                return String::from("  No open tasks");
            }
            tasks
                .iter()
                .map(|task| {
                    format!(
                        "  #{} {:<3} {} [{}]",
                        task.id, task.priority, task.title, task.category
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
    );

    let _ = writeln!(out, "\nTask statistics");
    let _ = writeln!(
        out,
        "{}",
        widget(dashboard.task_stats(), |stats| format!(
            "  pending {}  open {}  in progress {}  done {}  (total open {})",
            stats.pending,
            stats.open,
            stats.in_progress,
            stats.done,
            stats.total_open()
        ))
    );

    if let Some(at) = dashboard.last_refresh() {
        let _ = writeln!(out, "\nLast update: {}", at.format("%H:%M:%S"));
    }
    out.trim_end().to_string()
}
