use std::time::Duration;
use thiserror::Error;

/// High-level classification of a fetch failure for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself was unusable. Still retried: the capability owns
    /// the judgement of what is malformed, the policy only bounds attempts.
    Invalid,
    /// Transient source failure.
    Transient,
    /// Sequence cancelled by the caller; never retried.
    Cancelled,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Error returned when a policy is constructed with unusable parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidPolicy {
    /// `max_attempts` would permit zero attempts.
    #[error("max_attempts must be at least 1")]
    NoAttempts,
}

/// Fixed-interval retry policy.
///
/// `max_attempts` counts every attempt including the first; `wait_interval`
/// is the delay inserted between failed attempts. There is no jitter and no
/// exponential growth, so the timing of a whole sequence is deterministic:
/// a run that fails k attempts waits exactly (k-1) intervals.
///
/// The policy is immutable once constructed. An optional time budget bounds
/// the total duration of a sequence independently of the attempt count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    wait_interval: Duration,
    time_budget: Option<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            wait_interval: Duration::from_secs(1),
            time_budget: None,
        }
    }
}

impl RetryPolicy {
    /// Build a policy. Fails fast with [`InvalidPolicy::NoAttempts`] when
    /// `max_attempts` is zero; a policy that performs no attempts at all
    /// could only ever report an empty non-result.
    pub fn new(max_attempts: u32, wait_interval: Duration) -> Result<Self, InvalidPolicy> {
        if max_attempts < 1 {
            return Err(InvalidPolicy::NoAttempts);
        }
        Ok(Self {
            max_attempts,
            wait_interval,
            time_budget: None,
        })
    }

    /// Bound the total duration of a retry sequence. When the next wait
    /// would overshoot the budget, the sequence stops and surfaces the most
    /// recent error instead of waiting.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn wait_interval(&self) -> Duration {
        self.wait_interval
    }

    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget
    }

    /// Decide what to do after a failed attempt. `attempt` is 1-based
    /// (1 = first attempt). Every failure kind except [`ErrorKind::Cancelled`]
    /// is retryable until attempts run out.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if kind == ErrorKind::Cancelled {
            return RetryDecision::NoRetry;
        }
        if attempt >= self.max_attempts {
            return RetryDecision::NoRetry;
        }
        RetryDecision::RetryAfter(self.wait_interval)
    }
}
