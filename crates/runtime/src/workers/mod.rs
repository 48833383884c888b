//! Background tasks internal to the crate.

mod sync;

pub(crate) use sync::{Command, SyncWorker};
