//! Fetch capability: the contract for retrieving data that may fail transiently.
//!
//! A [`Fetcher`] takes a map of string parameters and either returns a map of
//! fetched data or a [`FetchError`]. The retry decorator in [`crate::retry`]
//! implements the same trait, so callers cannot tell a decorated fetcher from
//! a direct one.

mod error;
mod flaky;
mod repository;

pub use error::FetchError;
pub use flaky::Flaky;
pub use repository::Repository;

use std::collections::HashMap;
use std::sync::Arc;

/// Fetch parameters: an order-irrelevant mapping of string keys to values.
/// An empty map is valid input, though sources may reject it.
pub type Params = HashMap<String, String>;

/// Fetched data: a mapping of string keys to values.
pub type Data = HashMap<String, String>;

/// Contract for a data source.
///
/// Implementers must be safe to call repeatedly with the same parameters (a
/// retrying caller assumes each attempt is free of one-shot side effects),
/// must report failure through [`FetchError`] rather than panicking, and must
/// bound the latency of a single call.
pub trait Fetcher {
    fn fetch(&self, params: &Params) -> Result<Data, FetchError>;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn fetch(&self, params: &Params) -> Result<Data, FetchError> {
        (**self).fetch(params)
    }
}

impl<T: Fetcher + ?Sized> Fetcher for Box<T> {
    fn fetch(&self, params: &Params) -> Result<Data, FetchError> {
        (**self).fetch(params)
    }
}

impl<T: Fetcher + ?Sized> Fetcher for Arc<T> {
    fn fetch(&self, params: &Params) -> Result<Data, FetchError> {
        (**self).fetch(params)
    }
}
