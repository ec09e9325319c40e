//! CLI command handlers. Each command is in its own file.

mod demo;
mod fetch;

pub use demo::run_demo;
pub use fetch::run_fetch;

use refetch_core::retry::{AttemptOutcome, AttemptRecord, Observer};

/// Observer that echoes each attempt to stdout, so a user watching the
/// terminal sees the retry sequence unfold.
pub(crate) struct PrintObserver;

impl Observer for PrintObserver {
    fn on_attempt(&self, record: &AttemptRecord) {
        match (record.outcome, record.wait_before_next) {
            (AttemptOutcome::Success, _) => {
                println!("attempt {} succeeded", record.attempt);
            }
            (AttemptOutcome::Failure, Some(wait)) => {
                println!(
                    "attempt {} failed, waiting {:?} before retry",
                    record.attempt, wait
                );
            }
            (AttemptOutcome::Failure, None) => {
                println!("attempt {} failed, giving up", record.attempt);
            }
        }
    }
}
