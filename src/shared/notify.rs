// src/shared/notify.rs
use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

//
// ──────────────────────────────────────────────────────────
// Notification surface
// ──────────────────────────────────────────────────────────
// The rendering layer shows these as dismissible banners. Producing
// them is the sync core's job; displaying and auto-dismissing them is
// the renderer's.
//

/// How long the renderer keeps a banner on screen before dismissing it.
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(Severity::Danger, message)
    }
}

pub trait NotificationSink: Send + Sync {
    fn publish(&self, notification: Notification);
}

/// Queueing sink for shells that drain banners on their render tick,
/// and for tests.
#[derive(Debug, Default)]
pub struct NotificationBuffer {
    queue: Mutex<Vec<Notification>>,
}

impl NotificationBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.queue.lock().expect("notification buffer lock poisoned"))
    }
}

impl NotificationSink for NotificationBuffer {
    fn publish(&self, notification: Notification) {
        self.queue
            .lock()
            .expect("notification buffer lock poisoned")
            .push(notification);
    }
}
