//! Runtime orchestration for client-side hiscore reconciliation.
//!
//! This crate wires the transport and storage abstractions, the per-board
//! leaderboard state machine, and worker tasks into a cohesive runtime API.
//! Consumers embed [`Runtime`] to open boards and interact with each
//! leaderboard through a cloneable [`LeaderboardHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`leaderboard`] holds the reconciliation state machine
//! - [`channel`] and [`store`] define the injected transport and storage
//!   seams with reference implementations
//! - [`events`] provides a topic-based event bus so observers can react to
//!   leaderboard changes without polling
//! - `workers` keeps background tasks internal to the crate

pub mod api;
pub mod channel;
pub mod events;
pub mod leaderboard;
pub mod name_preset;
pub mod runtime;
pub mod store;

mod workers;

pub use api::{LeaderboardHandle, Result, SyncError};
pub use channel::{Channel, ChannelError, ChannelMessage, MemoryChannel, topics};
pub use events::{Event, EventBus, LeaderboardEvent, SyncEvent, Topic};
pub use leaderboard::{Leaderboard, MAX_ROWS, Row, RowStatus, StoredHiscores};
pub use name_preset::NamePreset;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use store::{DurableStore, FileStore, MemoryStore, StoreError};
