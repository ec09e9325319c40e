//! Retry decorator: wraps a fetcher and re-exposes the same contract.

use super::observe::{NoopObserver, Observer};
use super::policy::RetryPolicy;
use super::run::run_with_retry;
use crate::control::CancelToken;
use crate::fetch::{Data, FetchError, Fetcher, Params};

/// Decorator that retries a wrapped [`Fetcher`] according to a
/// [`RetryPolicy`].
///
/// A `Retrier` satisfies the same contract as the capability it wraps, so a
/// caller cannot tell a decorated fetcher from a direct one except through
/// latency and the diagnostics stream. Attempts run strictly sequentially;
/// each call owns its own attempt counter, so concurrent calls on one
/// instance do not interfere. The wrapped fetcher must itself be safe to
/// retry (no one-shot side effects) and, if stateful, provides its own
/// concurrency safety.
///
/// The cancel token is shared by every call on this instance and latches:
/// once cancelled, in-flight sequences abort promptly (including mid-wait)
/// and later calls fail immediately with [`FetchError::Cancelled`].
pub struct Retrier<F> {
    policy: RetryPolicy,
    fetcher: F,
    cancel: CancelToken,
    observer: Box<dyn Observer + Send + Sync>,
}

impl<F: Fetcher> Retrier<F> {
    /// Wrap `fetcher` with the given policy, a fresh cancel token, and a
    /// no-op diagnostics sink.
    pub fn new(policy: RetryPolicy, fetcher: F) -> Self {
        Self {
            policy,
            fetcher,
            cancel: CancelToken::new(),
            observer: Box::new(NoopObserver),
        }
    }

    /// Replace the diagnostics sink.
    pub fn with_observer(mut self, observer: impl Observer + Send + Sync + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Use a caller-supplied cancel token so an external signal can abort
    /// an in-progress retry sequence.
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Handle to this instance's cancel token.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }
}

impl<F: Fetcher> Fetcher for Retrier<F> {
    fn fetch(&self, params: &Params) -> Result<Data, FetchError> {
        run_with_retry(&self.policy, &self.cancel, self.observer.as_ref(), || {
            self.fetcher.fetch(params)
        })
    }
}
