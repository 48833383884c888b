//! Topic names of the hiscore wire protocol.
//!
//! The server keys its routing on these exact strings; they are built in one
//! place so the formats cannot drift between subscribe and publish sites.

use game_core::BoardId;

/// Authoritative snapshots pushed by the server (payload: entry array).
pub fn updates(board: &BoardId) -> String {
    format!("hiscores for {}", board)
}

/// Locally committed entries submitted for saving (payload: one entry).
pub fn submit(board: &BoardId) -> String {
    format!("hiscore for {}", board)
}

/// Request for a fresh authoritative snapshot (no payload).
pub fn request(board: &BoardId) -> String {
    format!("request of hiscores for {}", board)
}
