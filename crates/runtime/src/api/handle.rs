//! Cloneable façade for one board's leaderboard.
//!
//! [`LeaderboardHandle`] hides the channel plumbing to the sync worker and
//! offers async helpers for mutating the draft, committing entries, and
//! querying the rendered rows.

use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{BoardId, MAX_NAME_LEN, RotationMove};

use super::errors::{Result, SyncError};
use crate::events::{Event, EventBus, Topic};
use crate::leaderboard::Row;
use crate::workers::Command;

/// Client-facing handle to one board's leaderboard.
#[derive(Clone)]
pub struct LeaderboardHandle {
    board_id: BoardId,
    command_tx: mpsc::Sender<Command>,
    bus: EventBus,
}

impl LeaderboardHandle {
    pub(crate) fn new(board_id: BoardId, command_tx: mpsc::Sender<Command>, bus: EventBus) -> Self {
        Self {
            board_id,
            command_tx,
            bus,
        }
    }

    pub fn board_id(&self) -> &BoardId {
        &self.board_id
    }

    /// Maximum accepted player-name length, for input fields.
    pub const fn max_name_len(&self) -> usize {
        MAX_NAME_LEN
    }

    /// The rendered view: up to seven ranked rows merged from the
    /// confirmed, pending, and draft sources.
    pub async fn rows(&self) -> Result<Vec<Row>> {
        self.request(|reply| Command::Rows { reply }).await
    }

    /// Approximate row count (no name deduplication), capped at seven.
    pub async fn len(&self) -> Result<usize> {
        self.request(|reply| Command::Len { reply }).await
    }

    /// Revision of the last applied authoritative update.
    pub async fn revision(&self) -> Result<u64> {
        self.request(|reply| Command::Revision { reply }).await
    }

    pub async fn has_draft(&self) -> Result<bool> {
        self.request(|reply| Command::HasDraft { reply }).await
    }

    /// True once the current draft was committed to the pending list.
    pub async fn draft_committed(&self) -> Result<bool> {
        self.request(|reply| Command::DraftCommitted { reply }).await
    }

    /// Start a new draft from a finished solution. The name is pre-filled
    /// from the last name the player entered on any board.
    pub async fn propose(&self, moves: Vec<RotationMove>) -> Result<()> {
        self.request(|reply| Command::Propose { moves, reply }).await
    }

    /// Rename the draft (trimmed, truncated to [`MAX_NAME_LEN`]). Silent
    /// no-op when no draft exists; check [`Self::has_draft`] first.
    pub async fn set_draft_name(&self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        self.request(|reply| Command::SetDraftName { name, reply })
            .await
    }

    /// Discard the draft without committing.
    pub async fn clear_draft(&self) -> Result<()> {
        self.request(|reply| Command::ClearDraft { reply }).await
    }

    /// Discard the draft and clear the committed flag (new game started).
    pub async fn reset_draft(&self) -> Result<()> {
        self.request(|reply| Command::ResetDraft { reply }).await
    }

    /// Commit the draft: persist it as pending and send it to the server.
    /// Silent no-op when no draft exists.
    pub async fn commit(&self) -> Result<()> {
        self.request(|reply| Command::Commit { reply })
            .await?
            .map_err(SyncError::Store)
    }

    /// Subscribe to runtime events (shared bus across boards).
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    async fn request<R>(&self, make: impl FnOnce(oneshot::Sender<R>) -> Command) -> Result<R> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(make(reply_tx))
            .await
            .map_err(|_| SyncError::CommandChannelClosed)?;

        reply_rx.await.map_err(SyncError::ReplyChannelClosed)
    }
}
