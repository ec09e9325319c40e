//! Bounded retry with fixed backoff.
//!
//! This module encapsulates the retry policy, error classification, the
//! per-attempt diagnostics contract, and the [`Retrier`] decorator that
//! re-exposes the [`crate::fetch::Fetcher`] contract while retrying a
//! wrapped fetcher underneath.

mod classify;
mod observe;
mod policy;
mod retrier;
mod run;

pub use classify::classify;
pub use observe::{AttemptOutcome, AttemptRecord, NoopObserver, Observer};
pub use policy::{ErrorKind, InvalidPolicy, RetryDecision, RetryPolicy};
pub use retrier::Retrier;
pub use run::run_with_retry;
