//! Single-slot notification surface
//!
//! At most one message is visible at a time: a new notice replaces the
//! current one, there is no queue. Expiry is checked on read rather than by
//! a timer task, so the type stays inert when nothing looks at it.

use std::time::{Duration, Instant};

use parking_lot::Mutex;

use engage_common::config::NoticeConfig;
use engage_core::{Notice, Notifier};

/// Default time a notice stays visible
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(3);

/// Notifier holding at most one live notice
pub struct SingleSlotNotice {
    ttl: Duration,
    slot: Mutex<Option<(Notice, Instant)>>,
}

impl SingleSlotNotice {
    /// Create a surface with the default 3 second TTL
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_NOTICE_TTL)
    }

    /// Create a surface with a custom TTL
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Create a surface from the configured TTL
    #[must_use]
    pub fn from_config(config: &NoticeConfig) -> Self {
        Self::with_ttl(Duration::from_millis(config.ttl_ms))
    }

    /// The currently visible notice, if it has not expired
    pub fn current(&self) -> Option<Notice> {
        let mut slot = self.slot.lock();
        match slot.as_ref() {
            Some((notice, shown_at)) if shown_at.elapsed() < self.ttl => Some(notice.clone()),
            Some(_) => {
                *slot = None;
                None
            }
            None => None,
        }
    }

    /// Dismiss the visible notice early
    pub fn dismiss(&self) {
        *self.slot.lock() = None;
    }
}

impl Default for SingleSlotNotice {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for SingleSlotNotice {
    fn show(&self, notice: Notice) {
        *self.slot.lock() = Some((notice, Instant::now()));
    }
}
