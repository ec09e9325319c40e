//! Shared test doubles: counting fetchers and a recording observer.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use refetch_core::fetch::{Data, FetchError, Fetcher, Params};
use refetch_core::retry::{AttemptRecord, Observer};

/// Fetcher that always fails with a transient error and counts its calls.
#[derive(Debug, Default)]
pub struct AlwaysFails {
    calls: AtomicU32,
}

impl AlwaysFails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Fetcher for AlwaysFails {
    fn fetch(&self, _params: &Params) -> Result<Data, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(FetchError::Transient("backend unavailable".to_string()))
    }
}

/// Observer that records every attempt it is shown.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    records: Mutex<Vec<AttemptRecord>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<AttemptRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl Observer for RecordingObserver {
    fn on_attempt(&self, record: &AttemptRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}

pub fn id_params() -> Params {
    let mut params = Params::new();
    params.insert("id".to_string(), "1".to_string());
    params
}
