//! Dashboard widgets and the periodic refresh loop.
//!
//! A refresh loads three independent widgets (status counters, recent
//! tasks, task statistics). A failing widget is marked failed on its own
//! and never blocks the others; a failing status call flips the indicator
//! to offline.

use std::future::Future;
use std::time::Duration;

use bach_client::{BachClient, ClientError};
use bach_config::DashboardConfig;
use bach_core::entities::Task;
use bach_core::responses::{ActionResult, ScannedTaskList, Stats, StatusResponse, TaskList};
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::BoardError;
use crate::notify::{Notification, Notifier};

/// Shortest period [`Dashboard::run_periodic`] will tick at.
pub const MIN_REFRESH_PERIOD: Duration = Duration::from_millis(1);

/// Requests the dashboard issues.
pub trait DashboardSource {
    fn status(&self) -> impl Future<Output = Result<StatusResponse, ClientError>> + Send;

    fn tasks(&self, status: &str) -> impl Future<Output = Result<TaskList, ClientError>> + Send;

    fn run_scanner(&self) -> impl Future<Output = Result<ActionResult, ClientError>> + Send;

    fn scanned_tasks(&self) -> impl Future<Output = Result<ScannedTaskList, ClientError>> + Send;

    fn run_headless(
        &self,
        prompt: &str,
        partner: &str,
    ) -> impl Future<Output = Result<ActionResult, ClientError>> + Send;

    fn start_prompt_manager(&self) -> impl Future<Output = Result<ActionResult, ClientError>> + Send;
}

impl DashboardSource for BachClient {
    async fn status(&self) -> Result<StatusResponse, ClientError> {
        BachClient::status(self).await
    }

    async fn tasks(&self, status: &str) -> Result<TaskList, ClientError> {
        self.list_tasks(Some(status)).await
    }

    async fn run_scanner(&self) -> Result<ActionResult, ClientError> {
        BachClient::run_scanner(self).await
    }

    async fn scanned_tasks(&self) -> Result<ScannedTaskList, ClientError> {
        BachClient::scanned_tasks(self, None, None).await
    }

    async fn run_headless(&self, prompt: &str, partner: &str) -> Result<ActionResult, ClientError> {
        BachClient::run_headless(self, prompt, partner).await
    }

    async fn start_prompt_manager(&self) -> Result<ActionResult, ClientError> {
        BachClient::start_prompt_manager(self).await
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    #[default]
    Unknown,
    Online,
    Offline,
}

impl Indicator {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "-",
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }
}

/// Load state of one widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum Widget<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Widget<T> {
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityClass {
    High,
    Medium,
    Low,
    Unranked,
}

impl PriorityClass {
    #[must_use]
    pub fn from_priority(priority: Option<&str>) -> Self {
        match priority {
            Some("P1") => Self::High,
            Some("P2") => Self::Medium,
            Some("P3" | "P4") => Self::Low,
            _ => Self::Unranked,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "priority-high",
            Self::Medium => "priority-medium",
            Self::Low => "priority-low",
            Self::Unranked => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentTask {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub priority: String,
    pub class: PriorityClass,
}

impl RecentTask {
    fn from_task(task: &Task, max_chars: usize) -> Self {
        Self {
            id: task.id,
            title: truncate(&task.title, max_chars),
            category: task
                .category
                .clone()
                .filter(|category| !category.is_empty())
                .unwrap_or_else(|| "General".to_string()),
            priority: task.priority.clone().unwrap_or_default(),
            class: PriorityClass::from_priority(task.priority.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub pending: usize,
    pub open: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl TaskStats {
    /// Pending, open and in-progress tasks together.
    #[must_use]
    pub const fn total_open(&self) -> usize {
        self.pending + self.open + self.in_progress
    }
}

pub struct Dashboard<S> {
    source: S,
    config: DashboardConfig,
    indicator: Indicator,
    stats: Widget<Stats>,
    recent: Widget<Vec<RecentTask>>,
    task_stats: Widget<TaskStats>,
    last_refresh: Option<DateTime<Local>>,
    notifier: Notifier,
}

impl<S: DashboardSource> Dashboard<S> {
    pub fn new(source: S, config: DashboardConfig) -> Self {
        Self {
            source,
            config,
            indicator: Indicator::default(),
            stats: Widget::default(),
            recent: Widget::default(),
            task_stats: Widget::default(),
            last_refresh: None,
            notifier: Notifier::default(),
        }
    }

    pub const fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub const fn stats(&self) -> &Widget<Stats> {
        &self.stats
    }

    pub const fn recent_tasks(&self) -> &Widget<Vec<RecentTask>> {
        &self.recent
    }

    pub const fn task_stats(&self) -> &Widget<TaskStats> {
        &self.task_stats
    }

    pub const fn last_refresh(&self) -> Option<DateTime<Local>> {
        self.last_refresh
    }

    pub const fn notification(&self) -> Option<&Notification> {
        self.notifier.current()
    }

    pub const fn take_notification(&mut self) -> Option<Notification> {
        self.notifier.take()
    }

    /// Reload every widget; returns whether all of them loaded.
    ///
    /// The refresh time is recorded only when every widget loaded.
    pub async fn refresh(&mut self) -> bool {
        self.load_status().await;
        self.load_recent_tasks().await;
        self.load_task_stats().await;

        let ok = !(self.stats.is_failed() || self.recent.is_failed() || self.task_stats.is_failed());
        if ok {
            self.last_refresh = Some(Local::now());
        } else {
            tracing::warn!("dashboard refresh incomplete");
        }
        ok
    }

    /// Refresh on a fixed interval, calling `on_cycle` after each refresh.
    ///
    /// Runs `cycles` times, or forever when `None`. The first refresh happens
    /// immediately. Failed cycles do not stop the timer. Periods shorter than
    /// [`MIN_REFRESH_PERIOD`] are raised to it.
    pub async fn run_periodic<F>(&mut self, period: Duration, cycles: Option<usize>, mut on_cycle: F)
    where
        F: FnMut(&Self),
    {
        if period < MIN_REFRESH_PERIOD {
            tracing::warn!(?period, "refresh period too short, using {MIN_REFRESH_PERIOD:?}");
        }
        let mut interval = tokio::time::interval(period.max(MIN_REFRESH_PERIOD));
        let mut completed = 0;
        while cycles.is_none_or(|limit| completed < limit) {
            interval.tick().await;
            self.refresh().await;
            on_cycle(&*self);
            completed += 1;
        }
    }

    /// Interval configured for [`Self::run_periodic`].
    pub const fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.config.refresh_interval_secs)
    }

    async fn load_status(&mut self) {
        match self.source.status().await {
            Ok(status) => {
                self.indicator = if status.is_online() {
                    Indicator::Online
                } else {
                    Indicator::Offline
                };
                self.stats = Widget::Ready(status.stats);
            }
            Err(error) => {
                tracing::warn!(%error, "status unavailable");
                self.indicator = Indicator::Offline;
                self.stats = Widget::Failed(error.to_string());
            }
        }
    }

    async fn load_recent_tasks(&mut self) {
        let tasks = async {
            let pending = self.source.tasks("pending").await?;
            let open = self.source.tasks("open").await?;
            Ok::<_, ClientError>(
                pending
                    .tasks
                    .iter()
                    .chain(&open.tasks)
                    .take(self.config.recent_tasks)
                    .map(|task| RecentTask::from_task(task, self.config.title_max_chars))
                    .collect::<Vec<_>>(),
            )
        }
        .await;
        self.recent = match tasks {
            Ok(tasks) => Widget::Ready(tasks),
            Err(error) => {
                tracing::warn!(%error, "recent tasks unavailable");
                Widget::Failed(error.to_string())
            }
        };
    }

    async fn load_task_stats(&mut self) {
        let stats = async {
            Ok::<_, ClientError>(TaskStats {
                pending: self.source.tasks("pending").await?.tasks.len(),
                open: self.source.tasks("open").await?.tasks.len(),
                in_progress: self.source.tasks("in_progress").await?.tasks.len(),
                done: self.source.tasks("done").await?.tasks.len(),
            })
        }
        .await;
        self.task_stats = match stats {
            Ok(stats) => Widget::Ready(stats),
            Err(error) => {
                tracing::warn!(%error, "task statistics unavailable");
                Widget::Failed(error.to_string())
            }
        };
    }

    // -- actions ------------------------------------------------------------

    /// # Errors
    ///
    /// Returns [`BoardError::Client`] when the scan cannot be started.
    pub async fn run_scanner(&mut self) -> Result<(), BoardError> {
        match self.source.run_scanner().await {
            Ok(_) => {
                self.notifier.success("Scanner started");
                Ok(())
            }
            Err(error) => Err(self.fail("Scanner error", error)),
        }
    }

    /// Load scanned tasks and report how many there are.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Client`] when the list cannot be loaded.
    pub async fn load_scanned(&mut self) -> Result<usize, BoardError> {
        match self.source.scanned_tasks().await {
            Ok(list) => {
                let count = if list.count == 0 { list.tasks.len() } else { list.count };
                self.notifier.success(format!("{count} tasks loaded"));
                Ok(count)
            }
            Err(error) => Err(self.fail("Error", error)),
        }
    }

    /// Hand a prompt to a headless AI session.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] for a blank prompt (nothing is sent)
    /// and [`BoardError::Client`] when the session is refused.
    pub async fn send_prompt(&mut self, prompt: &str, partner: &str) -> Result<(), BoardError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            self.notifier.error("Please enter a prompt");
            return Err(BoardError::Validation("Please enter a prompt".into()));
        }
        match self.source.run_headless(prompt, partner).await {
            Ok(_) => {
                self.notifier.success("AI session started");
                Ok(())
            }
            Err(error) => Err(self.fail("Error", error)),
        }
    }

    /// # Errors
    ///
    /// Returns [`BoardError::Client`] when the prompt manager cannot be launched.
    pub async fn start_prompt_manager(&mut self) -> Result<String, BoardError> {
        match self.source.start_prompt_manager().await {
            Ok(result) => {
                let message = result
                    .message
                    .unwrap_or_else(|| "Prompt manager started".to_string());
                self.notifier.success(message.clone());
                Ok(message)
            }
            Err(error) => Err(self.fail("Prompt manager could not be started", error)),
        }
    }

    fn fail(&mut self, context: &str, error: ClientError) -> BoardError {
        self.notifier.error(format!("{context}: {error}"));
        error.into()
    }
}

/// Cut `text` to `max_chars` characters, appending `...` when shortened.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("P1"), PriorityClass::High)]
    #[case(Some("P2"), PriorityClass::Medium)]
    #[case(Some("P3"), PriorityClass::Low)]
    #[case(Some("P4"), PriorityClass::Low)]
    #[case(Some("hoch"), PriorityClass::Unranked)]
    #[case(None, PriorityClass::Unranked)]
    fn priority_classes(#[case] priority: Option<&str>, #[case] expected: PriorityClass) {
        assert_eq!(PriorityClass::from_priority(priority), expected);
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 5), "abcde...");
        assert_eq!(truncate(&"x".repeat(50), 50), "x".repeat(50));
        assert_eq!(truncate(&"ä".repeat(51), 50), format!("{}...", "ä".repeat(50)));
    }

    #[test]
    fn total_open_excludes_done() {
        let stats = TaskStats {
            pending: 1,
            open: 2,
            in_progress: 3,
            done: 10,
        };
        assert_eq!(stats.total_open(), 6);
    }
}
