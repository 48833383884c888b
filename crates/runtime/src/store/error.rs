//! Error types raised by store implementations.

use thiserror::Error;

/// Errors surfaced by durable store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupted data under key {key}: {detail}")]
    CorruptedData { key: String, detail: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;
