//! Failure-injecting wrapper used by the demo command and the tests to make
//! the success-after-k-failures path observable.

use std::sync::atomic::{AtomicU32, Ordering};

use super::{Data, FetchError, Fetcher, Params};

/// Wrapper that fails the first `n` calls with a transient error, then
/// delegates to the inner fetcher. The countdown is shared across calls.
#[derive(Debug)]
pub struct Flaky<F> {
    inner: F,
    remaining: AtomicU32,
}

impl<F: Fetcher> Flaky<F> {
    pub fn new(inner: F, failures: u32) -> Self {
        Self {
            inner,
            remaining: AtomicU32::new(failures),
        }
    }
}

impl<F: Fetcher> Fetcher for Flaky<F> {
    fn fetch(&self, params: &Params) -> Result<Data, FetchError> {
        let before = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .unwrap_or(0);
        if before > 0 {
            return Err(FetchError::Transient(format!(
                "injected failure ({} left)",
                before - 1
            )));
        }
        self.inner.fetch(params)
    }
}
