//! Storage seam: durable key-value persistence.
//!
//! The reconciler persists each board's hiscores under one key as one JSON
//! document, so the pending and confirmed lists are updated atomically as a
//! pair. [`DurableStore`] is the injected contract; [`FileStore`] is the
//! production implementation and [`MemoryStore`] serves tests and throwaway
//! sessions.

mod error;
mod file;
mod memory;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

use serde_json::Value;

/// Key-value store with atomic get/set of a JSON value under a string key,
/// surviving process restarts (memory-backed impls excepted).
pub trait DurableStore: Send + Sync {
    /// Load the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Atomically replace the value stored under `key`. A concurrent or
    /// crashing reader never observes a partially written value.
    fn set(&self, key: &str, value: &Value) -> Result<()>;
}

impl<S: DurableStore + ?Sized> DurableStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &Value) -> Result<()> {
        (**self).set(key, value)
    }
}
