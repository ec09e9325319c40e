//! Per-attempt diagnostics for retry sequences.
//!
//! The retry loop reports what happened on each attempt; where the records
//! go is the caller's decision. The loop only ever holds a borrowed sink.

use std::time::Duration;

/// Outcome of a single attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Success,
    Failure,
}

/// One attempt as seen by a diagnostics sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    /// 1-based attempt number.
    pub attempt: u32,
    pub outcome: AttemptOutcome,
    /// Backoff delay before the next attempt; `None` on success and after
    /// the final attempt of a sequence.
    pub wait_before_next: Option<Duration>,
}

/// Sink for per-attempt diagnostics.
pub trait Observer {
    fn on_attempt(&self, record: &AttemptRecord);
}

impl<T: Observer + ?Sized> Observer for std::sync::Arc<T> {
    fn on_attempt(&self, record: &AttemptRecord) {
        (**self).on_attempt(record)
    }
}

/// Observer that discards all records.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn on_attempt(&self, _record: &AttemptRecord) {}
}
