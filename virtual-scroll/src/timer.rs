//! Cancellable quiet-period timer.
//!
//! The engines are single-threaded and take the current time from the caller (`now_ms`), so a
//! "scheduled callback" is a deadline that the owner polls from `tick`.

/// Quiet period after the last scroll event before `is_scrolling` resets.
pub const IS_SCROLLING_DEBOUNCE_INTERVAL_MS: u64 = 150;

/// Handle of a requested timeout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeoutHandle {
    id: u64,
    deadline_ms: u64,
}

impl TimeoutHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn deadline_ms(&self) -> u64 {
        self.deadline_ms
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.deadline_ms
    }
}

/// A single-slot timer: arming it replaces (and thereby cancels) any pending timeout.
#[derive(Clone, Debug, Default)]
pub struct Timer {
    pending: Option<TimeoutHandle>,
    next_id: u64,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a timeout firing `delay_ms` after `now_ms`, cancelling the pending one.
    pub fn request_timeout(&mut self, now_ms: u64, delay_ms: u64) -> TimeoutHandle {
        self.cancel_timeout();
        let handle = TimeoutHandle {
            id: self.next_id,
            deadline_ms: now_ms.saturating_add(delay_ms),
        };
        self.next_id = self.next_id.wrapping_add(1);
        self.pending = Some(handle);
        handle
    }

    /// Cancels the pending timeout. Returns the handle that was cancelled, if any.
    pub fn cancel_timeout(&mut self) -> Option<TimeoutHandle> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<TimeoutHandle> {
        self.pending
    }

    /// Consumes the pending timeout if its deadline has passed.
    ///
    /// A fired timeout is cleared before it is returned, so each handle fires at most once.
    pub fn poll(&mut self, now_ms: u64) -> Option<TimeoutHandle> {
        match self.pending {
            Some(handle) if handle.is_due(now_ms) => self.pending.take(),
            _ => None,
        }
    }
}
