//! Topic-based event bus for leaderboard observers.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{LeaderboardEvent, SyncEvent};
