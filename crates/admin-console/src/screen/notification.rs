//! Transient messages shown to the operator after a save or delete.

use std::time::Duration;
use tracing::{info, warn};

/// How long a notification stays on screen.
pub const NOTIFICATION_LIFE: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub severity: Severity,
    pub summary: &'static str,
    pub detail: String,
    pub life: Duration,
}

impl Notification {
    pub fn info(detail: impl Into<String>) -> Self {
        Self::new(Severity::Info, "Success!", detail.into())
    }

    pub fn success(detail: impl Into<String>) -> Self {
        Self::new(Severity::Success, "Success!", detail.into())
    }

    pub fn error(detail: impl Into<String>) -> Self {
        Self::new(Severity::Error, "Error!", detail.into())
    }

    fn new(severity: Severity, summary: &'static str, detail: String) -> Self {
        match severity {
            Severity::Error => warn!(%detail, "Notify"),
            _ => info!(?severity, %detail, "Notify"),
        }
        Self {
            severity,
            summary,
            detail,
            life: NOTIFICATION_LIFE,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
