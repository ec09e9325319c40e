//! Cancellation for in-flight retry sequences.
//!
//! A [`CancelToken`] is shared between a caller and a retry loop. Requesting
//! cancellation latches the token and wakes any thread blocked in a backoff
//! wait immediately, so a long wait does not delay the abort.

use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

/// Cloneable cancellation handle. All clones observe the same state; once
/// cancelled, a token stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: Mutex<bool>,
    cond: Condvar,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Any thread blocked in
    /// [`wait_interruptible`](Self::wait_interruptible) wakes up.
    pub fn cancel(&self) {
        let mut cancelled = self.inner.cancelled.lock().unwrap();
        *cancelled = true;
        self.inner.cond.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.inner.cancelled.lock().unwrap()
    }

    /// Block for `timeout` or until the token is cancelled, whichever comes
    /// first. Returns true if cancellation was requested.
    pub fn wait_interruptible(&self, timeout: Duration) -> bool {
        let cancelled = self.inner.cancelled.lock().unwrap();
        let (cancelled, _) = self
            .inner
            .cond
            .wait_timeout_while(cancelled, timeout, |done| !*done)
            .unwrap();
        *cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn wait_runs_full_timeout_without_cancel() {
        let token = CancelToken::new();
        let start = Instant::now();
        let cancelled = token.wait_interruptible(Duration::from_millis(30));
        assert!(!cancelled);
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn cancel_wakes_waiter_early() {
        let token = CancelToken::new();
        let waiter = token.clone();

        let handle = thread::spawn(move || {
            let start = Instant::now();
            let cancelled = waiter.wait_interruptible(Duration::from_secs(10));
            (cancelled, start.elapsed())
        });

        thread::sleep(Duration::from_millis(20));
        token.cancel();

        let (cancelled, elapsed) = handle.join().unwrap();
        assert!(cancelled);
        assert!(elapsed < Duration::from_secs(5), "wait should end early");
    }

    #[test]
    fn cancelled_token_stays_cancelled() {
        let token = CancelToken::new();
        token.cancel();
        assert!(token.is_cancelled());
        assert!(token.wait_interruptible(Duration::from_millis(10)));
    }
}
