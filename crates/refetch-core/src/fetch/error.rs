//! Fetch error type, kept as a dedicated enum so the retry layer can
//! classify failures before deciding whether to try again.

use thiserror::Error;

/// Error returned by a single fetch attempt.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request itself was unusable (e.g. no parameters at all).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The source failed in a way that may succeed on a later attempt.
    #[error("transient failure: {0}")]
    Transient(String),
    /// The retry sequence was cancelled before this attempt completed.
    #[error("fetch cancelled")]
    Cancelled,
}
