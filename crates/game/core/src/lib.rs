//! Pure domain types for the tile-rotation puzzle.
//!
//! This crate defines the vocabulary shared by every other layer: board
//! identity, rotation move descriptors, and hiscore entries with their
//! comparison rules. It performs no I/O and owns no mutable state; all
//! synchronization and persistence live in the `runtime` crate.

pub mod board;
pub mod hiscore;
pub mod rotation;

pub use board::BoardId;
pub use hiscore::{HiscoreEntry, MAX_NAME_LEN, better_or_equal, sanitize_name};
pub use rotation::{RotationMove, TileRect};
