//! Hiscore entries and their comparison rules.

use crate::rotation::RotationMove;

/// Maximum player-name length accepted on a hiscore entry.
pub const MAX_NAME_LEN: usize = 8;

/// One leaderboard entry: a player name and the solution it scored with.
///
/// `move_count` is carried explicitly (redundant with `moves.len()`) so that
/// entries can be ranked without decoding the move sequence. Lower
/// `move_count` is strictly better. The name is the dedup key within a
/// rendered view; it is not globally unique.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HiscoreEntry {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "rotationMoves"))]
    pub moves: Vec<RotationMove>,
    #[cfg_attr(feature = "serde", serde(rename = "moveCount"))]
    pub move_count: u32,
}

impl HiscoreEntry {
    /// Build an entry from a solution, deriving `move_count`.
    pub fn new(name: impl Into<String>, moves: Vec<RotationMove>) -> Self {
        let move_count = moves.len() as u32;
        Self {
            name: name.into(),
            moves,
            move_count,
        }
    }
}

/// Trim surrounding whitespace and truncate to [`MAX_NAME_LEN`] characters.
pub fn sanitize_name(name: &str) -> String {
    name.trim().chars().take(MAX_NAME_LEN).collect()
}

/// Ranking predicate used by the merge: `a` wins when it exists and `b`
/// either does not or has no fewer moves. An absent entry loses against
/// anything defined.
pub fn better_or_equal(a: Option<&HiscoreEntry>, b: Option<&HiscoreEntry>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.move_count <= b.move_count,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, move_count: u32) -> HiscoreEntry {
        HiscoreEntry {
            name: name.to_string(),
            moves: Vec::new(),
            move_count,
        }
    }

    #[test]
    fn sanitize_trims_and_truncates() {
        assert_eq!(sanitize_name("  LongPlayerName  "), "LongPlay");
        assert_eq!(sanitize_name(" Zoe "), "Zoe");
        assert_eq!(sanitize_name("        "), "");
    }

    #[test]
    fn fewer_moves_wins_ties_included() {
        let fast = entry("AL", 8);
        let slow = entry("BO", 10);

        assert!(better_or_equal(Some(&fast), Some(&slow)));
        assert!(!better_or_equal(Some(&slow), Some(&fast)));
        assert!(better_or_equal(Some(&fast), Some(&fast.clone())));
    }

    #[test]
    fn absent_entries_always_lose() {
        let any = entry("AL", 100);

        assert!(better_or_equal(Some(&any), None));
        assert!(!better_or_equal(None, Some(&any)));
        assert!(!better_or_equal(None, None));
    }

    #[test]
    fn move_count_is_derived_from_solution() {
        use crate::rotation::{RotationMove, TileRect};

        let moves = vec![
            RotationMove::new(TileRect::new(0, 0, 1, 1), true),
            RotationMove::new(TileRect::new(1, 0, 2, 1), false),
        ];
        let e = HiscoreEntry::new("AL", moves);
        assert_eq!(e.move_count, 2);
    }
}
