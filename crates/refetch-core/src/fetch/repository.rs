//! Built-in reference data source: deterministic and in-memory, so retry
//! behavior can be observed without a real backend.

use super::{Data, FetchError, Fetcher, Params};

/// Deterministic in-memory source.
///
/// Rejects an empty parameter map with [`FetchError::InvalidRequest`]; any
/// non-empty request returns the same fixed record.
#[derive(Debug, Default, Clone, Copy)]
pub struct Repository;

impl Repository {
    pub fn new() -> Self {
        Self
    }
}

impl Fetcher for Repository {
    fn fetch(&self, params: &Params) -> Result<Data, FetchError> {
        if params.is_empty() {
            return Err(FetchError::InvalidRequest(
                "no parameters provided".to_string(),
            ));
        }

        let mut data = Data::new();
        data.insert("user".to_string(), "root".to_string());
        data.insert("password".to_string(), "swordfish".to_string());
        tracing::debug!(params = params.len(), "repository returned fixed record");
        Ok(data)
    }
}
