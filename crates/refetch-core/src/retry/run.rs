//! Retry loop: run a fetch closure until success or the policy says stop.

use std::time::Instant;

use super::classify::classify;
use super::observe::{AttemptOutcome, AttemptRecord, Observer};
use super::policy::{RetryDecision, RetryPolicy};
use crate::control::CancelToken;
use crate::fetch::FetchError;

/// Runs `f` until it succeeds, the policy stops retrying, or `cancel` fires.
///
/// Attempts run strictly sequentially. On a retryable failure the calling
/// thread blocks for the policy's wait interval; a cancellation request
/// interrupts the wait and surfaces [`FetchError::Cancelled`]. On
/// exhaustion the final attempt's error is returned unchanged.
pub fn run_with_retry<T, F>(
    policy: &RetryPolicy,
    cancel: &CancelToken,
    observer: &dyn Observer,
    mut f: F,
) -> Result<T, FetchError>
where
    F: FnMut() -> Result<T, FetchError>,
{
    let deadline = policy.time_budget().map(|budget| Instant::now() + budget);
    let mut attempt = 1u32;
    loop {
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }

        match f() {
            Ok(value) => {
                observer.on_attempt(&AttemptRecord {
                    attempt,
                    outcome: AttemptOutcome::Success,
                    wait_before_next: None,
                });
                tracing::debug!(attempt, "fetch succeeded");
                return Ok(value);
            }
            Err(e) => {
                let kind = classify(&e);
                let mut decision = policy.decide(attempt, kind);
                // A wait that would overshoot the time budget ends the
                // sequence with the error we already have.
                if let (RetryDecision::RetryAfter(delay), Some(deadline)) = (decision, deadline) {
                    if Instant::now() + delay > deadline {
                        tracing::debug!(attempt, "time budget exhausted, not retrying");
                        decision = RetryDecision::NoRetry;
                    }
                }

                match decision {
                    RetryDecision::NoRetry => {
                        observer.on_attempt(&AttemptRecord {
                            attempt,
                            outcome: AttemptOutcome::Failure,
                            wait_before_next: None,
                        });
                        tracing::debug!(attempt, error = %e, "fetch failed, not retrying");
                        return Err(e);
                    }
                    RetryDecision::RetryAfter(delay) => {
                        observer.on_attempt(&AttemptRecord {
                            attempt,
                            outcome: AttemptOutcome::Failure,
                            wait_before_next: Some(delay),
                        });
                        tracing::debug!(
                            attempt,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "fetch failed, waiting before retry"
                        );
                        if cancel.wait_interruptible(delay) {
                            return Err(FetchError::Cancelled);
                        }
                        attempt += 1;
                    }
                }
            }
        }
    }
}
