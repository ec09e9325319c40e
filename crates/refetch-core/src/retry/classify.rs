//! Classify fetch errors into retry policy error kinds.

use super::policy::ErrorKind;
use crate::fetch::FetchError;

/// Map a fetch error onto the kinds the policy understands.
pub fn classify(e: &FetchError) -> ErrorKind {
    match e {
        FetchError::InvalidRequest(_) => ErrorKind::Invalid,
        FetchError::Transient(_) => ErrorKind::Transient,
        FetchError::Cancelled => ErrorKind::Cancelled,
    }
}
