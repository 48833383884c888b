//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and the durable store so clients
//! can bubble them up with consistent context. There are deliberately few of
//! these: the reconciler sanitizes or ignores bad input rather than failing,
//! since it manages client-side UX state, not a system of record.

use thiserror::Error;
use tokio::sync::oneshot;

pub use crate::store::StoreError;

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("sync worker command channel closed")]
    CommandChannelClosed,

    #[error("sync worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("sync worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("runtime requires a channel to be configured before building")]
    MissingChannel,

    #[error("runtime requires a durable store to be configured before building")]
    MissingStore,
}
