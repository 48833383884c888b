//! Per-board sync worker.
//!
//! One worker task exclusively owns one [`Leaderboard`]; every mutation
//! happens inside its event loop, so no locks guard leaderboard state.
//! The loop multiplexes three inputs:
//! 1. authoritative snapshots from the channel subscription,
//! 2. connection notifications (each one triggers a snapshot request),
//! 3. commands from [`crate::LeaderboardHandle`] clones.
//!
//! The worker stops when every handle is dropped or on explicit Shutdown.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info, warn};

use game_core::{HiscoreEntry, RotationMove};

use crate::channel::{Channel, ChannelMessage, topics};
use crate::events::{Event, EventBus, LeaderboardEvent, SyncEvent};
use crate::leaderboard::{Leaderboard, Row, StoredHiscores};
use crate::name_preset::NamePreset;
use crate::store::{DurableStore, StoreError};

/// Commands that can be sent to a sync worker.
pub(crate) enum Command {
    Rows {
        reply: oneshot::Sender<Vec<Row>>,
    },
    Len {
        reply: oneshot::Sender<usize>,
    },
    Revision {
        reply: oneshot::Sender<u64>,
    },
    HasDraft {
        reply: oneshot::Sender<bool>,
    },
    DraftCommitted {
        reply: oneshot::Sender<bool>,
    },
    Propose {
        moves: Vec<RotationMove>,
        reply: oneshot::Sender<()>,
    },
    SetDraftName {
        name: String,
        reply: oneshot::Sender<()>,
    },
    ClearDraft {
        reply: oneshot::Sender<()>,
    },
    ResetDraft {
        reply: oneshot::Sender<()>,
    },
    Commit {
        reply: oneshot::Sender<Result<(), StoreError>>,
    },

    /// Shutdown the worker gracefully
    Shutdown,
}

/// Background worker that owns one board's leaderboard state.
pub(crate) struct SyncWorker {
    leaderboard: Leaderboard,
    store: Arc<dyn DurableStore>,
    channel: Arc<dyn Channel>,
    preset: NamePreset,
    bus: EventBus,

    updates_rx: broadcast::Receiver<ChannelMessage>,
    connections_rx: broadcast::Receiver<()>,
    command_rx: mpsc::Receiver<Command>,
}

impl SyncWorker {
    /// Build a worker for one board, restoring prior state from the store.
    ///
    /// A malformed or partial stored value (either list missing) is treated
    /// as absent and the board starts empty; this covers first runs and
    /// values written by incompatible versions alike.
    pub(crate) fn open(
        mut leaderboard: Leaderboard,
        store: Arc<dyn DurableStore>,
        channel: Arc<dyn Channel>,
        preset: NamePreset,
        bus: EventBus,
        command_rx: mpsc::Receiver<Command>,
    ) -> Self {
        let key = leaderboard.board_id().storage_key();
        match store.get(&key) {
            Ok(Some(value)) => match serde_json::from_value::<StoredHiscores>(value) {
                Ok(stored) => leaderboard.restore(stored),
                Err(e) => debug!(key = %key, error = %e, "stored hiscores unusable, starting empty"),
            },
            Ok(None) => debug!(key = %key, "no stored hiscores, starting empty"),
            Err(e) => debug!(key = %key, error = %e, "failed to read stored hiscores, starting empty"),
        }

        // Subscribe before the loop starts so no update can slip past.
        let updates_rx = channel.subscribe(&topics::updates(leaderboard.board_id()));
        let connections_rx = channel.connections();

        Self {
            leaderboard,
            store,
            channel,
            preset,
            bus,
            updates_rx,
            connections_rx,
            command_rx,
        }
    }

    /// Main worker loop
    pub(crate) async fn run(mut self) {
        info!(board = %self.leaderboard.board_id(), "sync worker started");

        // Recovery: a previous session may have ended before its pending
        // entries reached the server. Re-sending an already-saved entry is
        // harmless since the server accepts by best-score-per-name.
        self.resend_pending().await;

        loop {
            tokio::select! {
                msg = self.updates_rx.recv() => {
                    match msg {
                        Ok(msg) => self.handle_update(msg).await,
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            // Each update is a full replacement, so missed
                            // ones are covered by the next.
                            warn!(skipped, "authoritative updates lagged");
                        }
                        Err(broadcast::error::RecvError::Closed) => {
                            info!("update stream closed, shutting down sync worker");
                            break;
                        }
                    }
                }

                conn = self.connections_rx.recv() => {
                    match conn {
                        Ok(()) => self.request_snapshot().await,
                        Err(broadcast::error::RecvError::Lagged(_)) => {
                            // A missed notification still means we were
                            // connected at some point; ask again.
                            self.request_snapshot().await;
                        }
                        Err(broadcast::error::RecvError::Closed) => {
                            debug!("connection stream closed");
                            break;
                        }
                    }
                }

                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(Command::Shutdown) => {
                            info!("shutdown command received");
                            break;
                        }
                        Some(cmd) => self.handle_command(cmd).await,
                        None => {
                            debug!("all handles dropped, shutting down sync worker");
                            break;
                        }
                    }
                }
            }
        }

        info!(board = %self.leaderboard.board_id(), "sync worker stopped");
    }

    /// Apply an authoritative snapshot pushed by the server.
    async fn handle_update(&mut self, msg: ChannelMessage) {
        let Some(payload) = msg.payload else {
            warn!(topic = %msg.topic, "authoritative update without payload, dropped");
            return;
        };

        let entries: Vec<HiscoreEntry> = match serde_json::from_value(payload) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(topic = %msg.topic, error = %e, "undecodable authoritative update, dropped");
                return;
            }
        };

        self.leaderboard.apply_confirmed(entries);

        // Persistence failures are logged, not surfaced: there is no caller
        // on this path, and in-memory state stays consistent either way.
        if let Err(e) = self.persist() {
            warn!(error = %e, "failed to persist authoritative update");
        }

        self.bus.publish(Event::Leaderboard(LeaderboardEvent::Updated {
            board: self.leaderboard.board_id().clone(),
            revision: self.leaderboard.revision(),
        }));
    }

    /// Ask the server for a fresh snapshot (sent once per connection).
    async fn request_snapshot(&self) {
        let topic = topics::request(self.leaderboard.board_id());
        if let Err(e) = self.channel.publish(&topic, None).await {
            warn!(topic = %topic, error = %e, "failed to request hiscores");
        }
    }

    /// Re-send every pending entry to the server.
    async fn resend_pending(&self) {
        let entries = self.leaderboard.pending().to_vec();
        for entry in entries {
            self.send_entry(&entry).await;
        }
    }

    /// Hand one entry to the channel and announce it on the bus.
    async fn send_entry(&self, entry: &HiscoreEntry) {
        let topic = topics::submit(self.leaderboard.board_id());

        let payload = match serde_json::to_value(entry) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "failed to encode hiscore entry");
                return;
            }
        };

        if let Err(e) = self.channel.publish(&topic, Some(payload)).await {
            // The entry stays in the pending list and is re-sent on the
            // next open; the channel owns reconnect retry.
            warn!(topic = %topic, error = %e, "failed to send hiscore entry");
            return;
        }

        self.bus.publish(Event::Sync(SyncEvent::EntrySent {
            board: self.leaderboard.board_id().clone(),
            name: entry.name.clone(),
            move_count: entry.move_count,
        }));
    }

    /// Persist pending and confirmed as one atomic document.
    fn persist(&self) -> Result<(), StoreError> {
        let value = serde_json::to_value(self.leaderboard.to_stored())
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.store
            .set(&self.leaderboard.board_id().storage_key(), &value)
    }

    async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Rows { reply } => {
                let _ = reply.send(self.leaderboard.rows());
            }
            Command::Len { reply } => {
                let _ = reply.send(self.leaderboard.len());
            }
            Command::Revision { reply } => {
                let _ = reply.send(self.leaderboard.revision());
            }
            Command::HasDraft { reply } => {
                let _ = reply.send(self.leaderboard.has_draft());
            }
            Command::DraftCommitted { reply } => {
                let _ = reply.send(self.leaderboard.draft_committed());
            }
            Command::Propose { moves, reply } => {
                self.leaderboard.propose(moves, &self.preset.get());
                let _ = reply.send(());
            }
            Command::SetDraftName { name, reply } => {
                if let Some(stored) = self.leaderboard.set_draft_name(&name) {
                    self.preset.set(&stored);
                }
                let _ = reply.send(());
            }
            Command::ClearDraft { reply } => {
                self.leaderboard.clear_draft();
                let _ = reply.send(());
            }
            Command::ResetDraft { reply } => {
                self.leaderboard.reset_draft();
                let _ = reply.send(());
            }
            Command::Commit { reply } => {
                let _ = reply.send(self.commit().await);
            }
            Command::Shutdown => {
                // Handled by the main loop before dispatch.
            }
        }
    }

    /// Commit the draft: persist the new pair, then send it to the server.
    ///
    /// A store failure surfaces to the caller; a publish failure does not,
    /// because the entry is already durable and recovery re-sends it.
    async fn commit(&mut self) -> Result<(), StoreError> {
        let Some(entry) = self.leaderboard.commit() else {
            return Ok(()); // no draft, caller-contract no-op
        };

        self.persist()?;
        self.send_entry(&entry).await;

        Ok(())
    }
}
