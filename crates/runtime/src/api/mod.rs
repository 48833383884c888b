//! Public API types for interacting with the sync runtime.

mod errors;
mod handle;

pub use errors::{Result, SyncError};
pub use handle::LeaderboardHandle;
