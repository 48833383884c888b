//! Top-level client orchestrating the sync runtime for a set of boards.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   └─→ Runtime (per-board sync workers)
//!         ├─→ Channel (injected transport)
//!         └─→ DurableStore (injected persistence)
//! ```
//!
//! # Separation of Concerns
//!
//! - **Client**: Composition root, lifecycle management, observer loop
//! - **Runtime**: Leaderboard state, reconciliation, persistence, sync
//! - **Channel / DurableStore**: transport and storage, injected at build
//!   time so tests and deployments can swap implementations

mod builder;
pub mod config;
pub mod logging;

pub use builder::ClientBuilder;

use anyhow::Result;

use game_core::BoardId;
use runtime::{Event, LeaderboardEvent, LeaderboardHandle, Runtime, Topic};

/// Top-level client container.
///
/// Opens every configured board on startup and then mirrors authoritative
/// leaderboard changes into the log until interrupted. Rendering frontends
/// hang off the same [`LeaderboardHandle`] API this loop uses.
pub struct Client {
    runtime: Runtime,
    boards: Vec<BoardId>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an error if shutdown fails to join a sync worker; leaderboard
    /// level problems (bad payloads, store hiccups) are logged and tolerated.
    pub async fn run(self) -> Result<()> {
        let mut updates = self.runtime.event_bus().subscribe(Topic::Leaderboard);

        let handles: Vec<LeaderboardHandle> = self
            .boards
            .iter()
            .map(|board| self.runtime.open(board.clone()))
            .collect();

        for handle in &handles {
            log_rows(handle).await;
        }

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("interrupted, shutting down");
                    break;
                }

                event = updates.recv() => {
                    match event {
                        Ok(Event::Leaderboard(LeaderboardEvent::Updated { board, revision })) => {
                            tracing::info!(%board, revision, "authoritative update applied");
                            if let Some(handle) =
                                handles.iter().find(|h| h.board_id() == &board)
                            {
                                log_rows(handle).await;
                            }
                        }
                        Ok(_) => {}
                        Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "leaderboard events lagged");
                        }
                        Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                    }
                }
            }
        }

        drop(handles);
        self.runtime.shutdown().await?;

        Ok(())
    }
}

/// Log the current rendered view of one board.
async fn log_rows(handle: &LeaderboardHandle) {
    match handle.rows().await {
        Ok(rows) => {
            for row in rows {
                tracing::info!(
                    board = %handle.board_id(),
                    rank = row.rank,
                    name = %row.entry.name,
                    moves = row.entry.move_count,
                    status = %row.status,
                );
            }
        }
        Err(e) => tracing::warn!(board = %handle.board_id(), error = %e, "failed to query rows"),
    }
}
