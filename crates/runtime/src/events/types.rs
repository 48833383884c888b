//! Event types for different topics.

use serde::{Deserialize, Serialize};

use game_core::BoardId;

/// Events related to leaderboard state changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LeaderboardEvent {
    /// An authoritative update was applied for a board. Observers holding a
    /// lower revision should re-query the rows.
    Updated { board: BoardId, revision: u64 },
}

/// Events related to server synchronization of pending entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SyncEvent {
    /// A committed entry was handed to the channel for saving. Emitted once
    /// per commit and again for each recovery re-send on open.
    EntrySent {
        board: BoardId,
        name: String,
        move_count: u32,
    },
}
