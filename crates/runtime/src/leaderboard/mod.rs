//! Per-board leaderboard state and reconciliation rules.
//!
//! A [`Leaderboard`] blends three sources: the server-confirmed list, the
//! locally pending (not yet acknowledged) entries, and an in-progress draft
//! the player is still editing. Authoritative pushes replace the confirmed
//! list wholesale and supersede pending duplicates; the rendered view merges
//! all three into at most [`MAX_ROWS`] ranked rows.
//!
//! The struct is pure state: persistence and transport are driven by the
//! sync worker that owns it.

mod state;

pub use state::Leaderboard;

use std::fmt;

use serde::{Deserialize, Serialize};

use game_core::HiscoreEntry;

/// Upper bound on rendered leaderboard rows.
pub const MAX_ROWS: usize = 7;

/// Origin of a rendered row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowStatus {
    /// Accepted by the server and part of the authoritative list.
    Confirmed,
    /// Committed locally, not yet acknowledged by the server.
    Pending,
    /// Still being edited; its name is not final.
    Draft,
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RowStatus::Confirmed => "confirmed",
            RowStatus::Pending => "pending",
            RowStatus::Draft => "draft",
        };
        write!(f, "{}", label)
    }
}

/// One rendered leaderboard line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub entry: HiscoreEntry,
    pub rank: usize,
    pub status: RowStatus,
}

/// Durable-store value for one board: the pending ("unsaved") and confirmed
/// ("saved") lists persisted as an atomic pair. A stored value missing either
/// field is rejected on load and the board starts empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredHiscores {
    pub unsaved: Vec<HiscoreEntry>,
    pub saved: Vec<HiscoreEntry>,
}
