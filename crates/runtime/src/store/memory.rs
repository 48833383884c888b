//! In-memory DurableStore implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use super::{DurableStore, Result, StoreError};

/// In-memory implementation of [`DurableStore`].
///
/// Values live in a map for the lifetime of the process; "durable" only in
/// the sense that the contract is honored within one run.
pub struct MemoryStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DurableStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let values = self.values.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &Value) -> Result<()> {
        let mut values = self.values.write().map_err(|_| StoreError::LockPoisoned)?;
        values.insert(key.to_string(), value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_then_get_roundtrips() {
        let store = MemoryStore::new();
        assert!(store.get("13.hiscores").unwrap().is_none());

        store.set("13.hiscores", &json!({"a": 1})).unwrap();
        assert_eq!(store.get("13.hiscores").unwrap(), Some(json!({"a": 1})));

        store.set("13.hiscores", &json!({"a": 2})).unwrap();
        assert_eq!(store.get("13.hiscores").unwrap(), Some(json!({"a": 2})));
    }
}
