//! Notification port - transient user-facing status messages

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient status message driven by an engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    /// Create a success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    /// Create an error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Sink for transient notices
///
/// Implementations hold at most one visible message; a new call replaces the
/// prior message rather than queueing behind it.
pub trait Notifier: Send + Sync {
    /// Show a notice, replacing any currently visible one
    fn show(&self, notice: Notice);
}
