//! Transient user notifications (toasts).
//!
//! Only the most recent notification is kept; a new one replaces it.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

impl Level {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct Notifier {
    current: Option<Notification>,
}

impl Notifier {
    pub fn notify(&mut self, level: Level, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%level, %message, "notification");
        self.current = Some(Notification { level, message });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(Level::Success, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(Level::Info, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.notify(Level::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(Level::Error, message);
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Remove and return the current notification (the toast was shown).
    pub const fn take(&mut self) -> Option<Notification> {
        self.current.take()
    }
}
