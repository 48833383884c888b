//! File-based DurableStore implementation.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{DurableStore, Result, StoreError};

/// File-based implementation of [`DurableStore`].
///
/// Each key is stored as `{key}.json` under the base directory. Writes go to
/// a temp file followed by an atomic rename, so a reader (or a crash mid
/// write) never observes a half-written document.
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a new file-backed store rooted at `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(StoreError::Io)?;
        Ok(Self { base_dir })
    }

    /// Get the path of the document backing a key.
    fn value_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl DurableStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let path = self.value_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(StoreError::Io)?;
        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::CorruptedData {
                key: key.to_string(),
                detail: e.to_string(),
            })?;

        tracing::debug!("Loaded {} from {}", key, path.display());

        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &Value) -> Result<()> {
        let path = self.value_path(key);
        let temp_path = path.with_extension("json.tmp");

        let bytes =
            serde_json::to_vec(value).map_err(|e| StoreError::Serialization(e.to_string()))?;

        // Write to temp file, then atomic rename
        fs::write(&temp_path, bytes).map_err(StoreError::Io)?;
        fs::rename(&temp_path, &path).map_err(StoreError::Io)?;

        tracing::debug!("Saved {} to {}", key, path.display());

        Ok(())
    }
}
