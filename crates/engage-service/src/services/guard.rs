//! In-flight operation guard
//!
//! The engines run on a cooperative scheduler and never serialize user
//! intent with a lock held across awaits. Instead each logical action owns
//! an `OperationGuard`: acquire a token before the first store call, drop
//! the duplicate invocation if one is already in flight, release on settle.
//! The token releases on drop, so failure paths cannot leak a held guard.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One-slot guard for a logical action
#[derive(Debug, Default, Clone)]
pub struct OperationGuard {
    busy: Arc<AtomicBool>,
}

impl OperationGuard {
    /// Create a released guard
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to begin the action
    ///
    /// Returns `None` if an identical action is already in flight; the
    /// caller drops the duplicate invocation.
    pub fn try_begin(&self) -> Option<OperationToken> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            Some(OperationToken {
                busy: Arc::clone(&self.busy),
            })
        } else {
            None
        }
    }

    /// Whether the action is currently in flight
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// RAII token held for the duration of one action
#[derive(Debug)]
pub struct OperationToken {
    busy: Arc<AtomicBool>,
}

impl Drop for OperationToken {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
