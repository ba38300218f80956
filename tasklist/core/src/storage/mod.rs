//! Key-value storage seam and the persistence bridge built on top of it.
//!
//! The browser's `localStorage` is the production backend; [`MemoryStore`]
//! stands in for it natively.

mod memory;
mod persistence;

pub use memory::MemoryStore;
pub use persistence::{Persistence, PersistenceError, StorageKeys};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage is not available")]
    Unavailable,
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Textual key-value store, modelled on the browser `Storage` API.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
