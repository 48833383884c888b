use game_core::{BoardId, HiscoreEntry, RotationMove, better_or_equal, sanitize_name};

use super::{MAX_ROWS, Row, RowStatus, StoredHiscores};

/// Reconciliation state for one board's leaderboard.
///
/// Invariants:
/// - `pending` is sorted non-decreasing by `move_count` (stable, so ties
///   keep insertion order).
/// - at most one draft exists.
/// - after [`Leaderboard::apply_confirmed`], no pending entry shares a name
///   with a confirmed entry of equal-or-better score.
pub struct Leaderboard {
    board_id: BoardId,
    confirmed: Vec<HiscoreEntry>,
    pending: Vec<HiscoreEntry>,
    draft: Option<HiscoreEntry>,
    draft_committed: bool,
    revision: u64,
}

impl Leaderboard {
    pub fn new(board_id: BoardId) -> Self {
        Self {
            board_id,
            confirmed: Vec::new(),
            pending: Vec::new(),
            draft: None,
            draft_committed: false,
            revision: 0,
        }
    }

    pub fn board_id(&self) -> &BoardId {
        &self.board_id
    }

    /// Monotonic counter, incremented once per accepted authoritative
    /// update. Observers compare it to detect change without deep equality.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn has_draft(&self) -> bool {
        self.draft.is_some()
    }

    /// True once the current draft has been moved into the pending list.
    pub fn draft_committed(&self) -> bool {
        self.draft_committed
    }

    /// Entries committed locally but not yet acknowledged by the server.
    pub fn pending(&self) -> &[HiscoreEntry] {
        &self.pending
    }

    /// Restore both lists from a persisted pair.
    pub fn restore(&mut self, stored: StoredHiscores) {
        self.pending = stored.unsaved;
        self.confirmed = stored.saved;
    }

    /// Snapshot both lists for atomic persistence.
    pub fn to_stored(&self) -> StoredHiscores {
        StoredHiscores {
            unsaved: self.pending.clone(),
            saved: self.confirmed.clone(),
        }
    }

    /// Apply an authoritative snapshot from the server.
    ///
    /// The confirmed list is replaced verbatim (server order is trusted for
    /// display tie-breaking; no client-side re-sort). Pending entries whose
    /// name now appears in the confirmed list with an equal-or-better score
    /// are superseded and dropped. Replacement-based, so redelivery and
    /// reordering across reconnects are harmless.
    pub fn apply_confirmed(&mut self, new_confirmed: Vec<HiscoreEntry>) {
        self.confirmed = new_confirmed;
        for confirmed in &self.confirmed {
            self.pending.retain(|pending| {
                !(confirmed.name == pending.name
                    && confirmed.move_count <= pending.move_count)
            });
        }
        self.revision += 1;
    }

    /// Start a new draft from a solution, named from the player's last-used
    /// name. Replaces any previous draft.
    pub fn propose(&mut self, moves: Vec<RotationMove>, preset_name: &str) {
        self.draft = Some(HiscoreEntry::new(preset_name, moves));
    }

    /// Rename the draft. No-op without a draft. Returns the sanitized name
    /// actually stored, so the caller can remember it as the new preset.
    pub fn set_draft_name(&mut self, name: &str) -> Option<String> {
        let draft = self.draft.as_mut()?;
        draft.name = sanitize_name(name);
        Some(draft.name.clone())
    }

    /// Discard the draft without committing.
    pub fn clear_draft(&mut self) {
        self.draft = None;
    }

    /// Discard the draft and forget that one was ever committed. Used when
    /// starting a new game on the board.
    pub fn reset_draft(&mut self) {
        self.draft = None;
        self.draft_committed = false;
    }

    /// Move the draft into the pending list, keeping it sorted by score.
    ///
    /// Returns the committed entry so the caller can persist and publish it.
    /// No-op without a draft. Does not touch `revision`, which tracks only
    /// authoritative changes.
    pub fn commit(&mut self) -> Option<HiscoreEntry> {
        let entry = self.draft.take()?;
        self.pending.push(entry.clone());
        // Stable sort: equal scores keep insertion order, there is no
        // secondary key.
        self.pending.sort_by_key(|e| e.move_count);
        self.draft_committed = true;
        Some(entry)
    }

    /// Approximate row count: `min(MAX_ROWS, confirmed + pending + draft)`.
    ///
    /// Unlike [`Leaderboard::rows`] this does not deduplicate names; it is a
    /// coarse size for layout, not an exact row count.
    pub fn len(&self) -> usize {
        let draft = if self.draft.is_some() { 1 } else { 0 };
        (self.confirmed.len() + self.pending.len() + draft).min(MAX_ROWS)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge the three sources into at most [`MAX_ROWS`] ranked rows.
    ///
    /// Cursor-based merge: at each step the draft (if not yet shown) is
    /// compared against the entries at the current pending and confirmed
    /// cursors; ties go draft > pending > confirmed, and within one source
    /// original order wins. Non-draft rows are deduplicated by name (best
    /// score wins); the draft is exempt since its final name is unknown.
    /// Recomputed from state on every call, so it is restartable per render
    /// frame.
    pub fn rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        let mut rank = 0;
        let mut pending_i = 0;
        let mut confirmed_i = 0;
        let mut draft_shown = false;
        let mut used_names: Vec<String> = Vec::new();

        while rank < MAX_ROWS {
            let pending = self.pending.get(pending_i);
            let confirmed = self.confirmed.get(confirmed_i);
            let draft = if draft_shown { None } else { self.draft.as_ref() };

            if better_or_equal(draft, pending) && better_or_equal(draft, confirmed) {
                // The predicate only holds for a present draft.
                if let Some(entry) = draft {
                    rows.push(Row {
                        entry: entry.clone(),
                        rank,
                        status: RowStatus::Draft,
                    });
                    rank += 1;
                    draft_shown = true;
                }
                continue;
            }

            let (entry, status) = if better_or_equal(pending, confirmed) {
                match pending {
                    Some(entry) => {
                        pending_i += 1;
                        (entry, RowStatus::Pending)
                    }
                    None => break,
                }
            } else if let Some(entry) = confirmed {
                confirmed_i += 1;
                (entry, RowStatus::Confirmed)
            } else {
                break; // no more hiscores
            };

            if used_names.iter().any(|used| *used == entry.name) {
                continue; // duplicate name; the cursor already moved past it
            }
            used_names.push(entry.name.clone());
            rows.push(Row {
                entry: entry.clone(),
                rank,
                status,
            });
            rank += 1;
        }

        rows
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

    fn board() -> Leaderboard {
        Leaderboard::new(BoardId::new("test"))
    }

    fn commit_with_score(lb: &mut Leaderboard, name: &str, move_count: u32) {
        lb.propose(vec![], "");
        lb.set_draft_name(name);
        if let Some(draft) = lb.draft.as_mut() {
            draft.move_count = move_count;
        }
        lb.commit();
    }

    #[test]
    fn authoritative_update_replaces_wholesale() {
        let mut lb = board();
        lb.apply_confirmed(vec![entry("AL", 10), entry("BO", 12)]);
        lb.apply_confirmed(vec![entry("CY", 5)]);

        let rows = lb.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].entry.name, "CY");
        assert_eq!(lb.revision(), 2);
    }

    #[test]
    fn idempotent_replacement() {
        let mut lb = board();
        commit_with_score(&mut lb, "BO", 8);
        commit_with_score(&mut lb, "AL", 9);

        let update = vec![entry("BO", 8)];
        lb.apply_confirmed(update.clone());
        let pending_once = lb.pending().to_vec();
        let stored_once = lb.to_stored();

        lb.apply_confirmed(update);
        assert_eq!(lb.pending(), pending_once.as_slice());
        assert_eq!(lb.to_stored().saved, stored_once.saved);
    }

    #[test]
    fn equal_score_supersedes_pending() {
        let mut lb = board();
        commit_with_score(&mut lb, "BO", 8);

        lb.apply_confirmed(vec![entry("BO", 8)]);
        assert!(lb.pending().is_empty());
    }

    #[test]
    fn better_confirmed_supersedes_pending() {
        let mut lb = board();
        commit_with_score(&mut lb, "BO", 10);

        lb.apply_confirmed(vec![entry("BO", 7)]);
        assert!(lb.pending().is_empty());
    }

    #[test]
    fn worse_confirmed_keeps_pending() {
        let mut lb = board();
        commit_with_score(&mut lb, "BO", 6);

        lb.apply_confirmed(vec![entry("BO", 9)]);
        assert_eq!(lb.pending().len(), 1);
        assert_eq!(lb.pending()[0].move_count, 6);
    }

    #[test]
    fn supersession_checks_every_pending_entry() {
        // The algorithm must not assume a name appears at most once.
        let mut lb = board();
        commit_with_score(&mut lb, "BO", 9);
        commit_with_score(&mut lb, "BO", 11);

        lb.apply_confirmed(vec![entry("BO", 10)]);
        assert_eq!(lb.pending().len(), 1);
        assert_eq!(lb.pending()[0].move_count, 9);
    }

    #[test]
    fn pending_stays_sorted_across_commits() {
        let mut lb = board();
        for (name, score) in [("AA", 9), ("BB", 4), ("CC", 7), ("DD", 4)] {
            commit_with_score(&mut lb, name, score);
        }

        let scores: Vec<u32> = lb.pending().iter().map(|e| e.move_count).collect();
        assert_eq!(scores, vec![4, 4, 7, 9]);
        // Stable: BB committed before DD keeps the earlier slot on the tie.
        assert_eq!(lb.pending()[0].name, "BB");
        assert_eq!(lb.pending()[1].name, "DD");
    }

    #[test]
    fn commit_clears_draft_and_marks_flag() {
        let mut lb = board();
        lb.propose(vec![], "AL");
        assert!(lb.has_draft());
        assert!(!lb.draft_committed());

        let committed = lb.commit();
        assert!(committed.is_some());
        assert!(!lb.has_draft());
        assert!(lb.draft_committed());

        // Committing again without a draft is a silent no-op.
        assert!(lb.commit().is_none());
    }

    #[test]
    fn reset_draft_clears_committed_flag() {
        let mut lb = board();
        lb.propose(vec![], "AL");
        lb.commit();
        assert!(lb.draft_committed());

        lb.reset_draft();
        assert!(!lb.draft_committed());
        assert!(!lb.has_draft());
    }

    #[test]
    fn set_draft_name_without_draft_is_noop() {
        let mut lb = board();
        assert_eq!(lb.set_draft_name("Zoe"), None);
    }

    #[test]
    fn draft_name_is_trimmed_and_truncated() {
        let mut lb = board();
        lb.propose(vec![], "");
        let stored = lb.set_draft_name("  LongPlayerName  ");
        assert_eq!(stored.as_deref(), Some("LongPlay"));
    }

    #[test]
    fn propose_seeds_name_from_preset() {
        let mut lb = board();
        lb.propose(vec![], "Zoe");
        assert_eq!(lb.rows()[0].entry.name, "Zoe");
    }

    #[test]
    fn pending_ranks_before_worse_confirmed() {
        let mut lb = board();
        lb.apply_confirmed(vec![entry("AL", 10)]);
        commit_with_score(&mut lb, "BO", 8);

        let rows = lb.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            (rows[0].entry.name.as_str(), rows[0].rank, rows[0].status),
            ("BO", 0, RowStatus::Pending)
        );
        assert_eq!(
            (rows[1].entry.name.as_str(), rows[1].rank, rows[1].status),
            ("AL", 1, RowStatus::Confirmed)
        );
    }

    #[test]
    fn rows_never_repeat_a_name() {
        let mut lb = board();
        lb.apply_confirmed(vec![entry("AL", 5), entry("BO", 6), entry("AL", 9)]);
        commit_with_score(&mut lb, "BO", 8);

        let rows = lb.rows();
        let names: Vec<&str> = rows.iter().map(|r| r.entry.name.as_str()).collect();
        assert_eq!(names, vec!["AL", "BO"]);
        // BO's pending 8 lost against the confirmed 6; AL's second entry
        // was deduplicated.
        assert_eq!(rows[1].status, RowStatus::Confirmed);
    }

    #[test]
    fn draft_is_exempt_from_dedup() {
        let mut lb = board();
        lb.apply_confirmed(vec![entry("AL", 5)]);
        lb.propose(vec![], "AL");

        let rows = lb.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].status, RowStatus::Draft);
        assert_eq!(rows[0].entry.name, "AL");
        assert_eq!(rows[1].status, RowStatus::Confirmed);
    }

    #[test]
    fn draft_wins_ties_against_both_sources() {
        let mut lb = board();
        lb.apply_confirmed(vec![entry("AL", 5)]);
        commit_with_score(&mut lb, "BO", 5);
        lb.propose(vec![], "CY");
        if let Some(draft) = lb.draft.as_mut() {
            draft.move_count = 5;
        }

        let statuses: Vec<RowStatus> = lb.rows().iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![RowStatus::Draft, RowStatus::Pending, RowStatus::Confirmed]
        );
    }

    #[test]
    fn rows_stop_at_seven() {
        let mut lb = board();
        let confirmed: Vec<HiscoreEntry> = (0..10)
            .map(|i| entry(&format!("P{}", i), i + 1))
            .collect();
        lb.apply_confirmed(confirmed);
        lb.propose(vec![], "me");

        let rows = lb.rows();
        assert_eq!(rows.len(), MAX_ROWS);
        assert_eq!(rows.last().map(|r| r.rank), Some(6));
    }

    #[test]
    fn len_is_capped_but_not_deduplicated() {
        let mut lb = board();
        lb.apply_confirmed(vec![entry("AL", 5), entry("AL", 6)]);
        commit_with_score(&mut lb, "AL", 7);
        lb.propose(vec![], "AL");

        // Four raw entries, two distinct rendered rows (draft + best AL).
        assert_eq!(lb.len(), 4);
        assert_eq!(lb.rows().len(), 2);

        lb.apply_confirmed((0..12).map(|i| entry(&format!("P{}", i), i)).collect());
        assert_eq!(lb.len(), MAX_ROWS);
    }

    #[test]
    fn restore_roundtrips_through_stored_pair() {
        let mut lb = board();
        lb.apply_confirmed(vec![entry("AL", 10)]);
        commit_with_score(&mut lb, "BO", 8);
        let stored = lb.to_stored();

        let mut fresh = board();
        fresh.restore(stored.clone());
        assert_eq!(fresh.to_stored(), stored);
        // Revision is in-memory only; a fresh instance starts at zero.
        assert_eq!(fresh.revision(), 0);
    }
}
