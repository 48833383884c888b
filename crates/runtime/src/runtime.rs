//! High-level runtime orchestrator.
//!
//! The runtime owns the injected channel and store, spawns one sync worker
//! per opened board, and exposes a builder-based API for clients.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use game_core::BoardId;

use crate::api::{LeaderboardHandle, Result, SyncError};
use crate::channel::Channel;
use crate::events::EventBus;
use crate::leaderboard::Leaderboard;
use crate::name_preset::NamePreset;
use crate::store::DurableStore;
use crate::workers::{Command, SyncWorker};

/// Runtime configuration shared across all opened boards.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub command_buffer_size: usize,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command_buffer_size: 32,
            event_buffer_size: 100,
        }
    }
}

/// Main runtime that owns per-board sync workers.
///
/// Design: [`Runtime`] owns workers and the shared collaborators;
/// [`LeaderboardHandle`] provides a cloneable façade per board.
pub struct Runtime {
    channel: Arc<dyn Channel>,
    store: Arc<dyn DurableStore>,
    preset: NamePreset,
    bus: EventBus,
    config: RuntimeConfig,

    // One entry per opened board, joined on shutdown.
    workers: Mutex<Vec<(mpsc::Sender<Command>, JoinHandle<()>)>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Open a board's leaderboard: restore it from the store, start its
    /// sync worker, and return a handle to it.
    ///
    /// Opening re-sends any pending entries left over from a previous
    /// session and subscribes to the board's authoritative updates.
    pub fn open(&self, board_id: BoardId) -> LeaderboardHandle {
        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size);

        let worker = SyncWorker::open(
            Leaderboard::new(board_id.clone()),
            Arc::clone(&self.store),
            Arc::clone(&self.channel),
            self.preset.clone(),
            self.bus.clone(),
            command_rx,
        );

        let join = tokio::spawn(worker.run());

        self.workers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((command_tx.clone(), join));

        LeaderboardHandle::new(board_id, command_tx, self.bus.clone())
    }

    /// The event bus shared by all boards of this runtime.
    pub fn event_bus(&self) -> &EventBus {
        &self.bus
    }

    /// The shared draft-name preset.
    pub fn name_preset(&self) -> &NamePreset {
        &self.preset
    }

    /// Shutdown the runtime gracefully, joining every worker.
    pub async fn shutdown(self) -> Result<()> {
        let workers = {
            let mut guard = self
                .workers
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            std::mem::take(&mut *guard)
        };

        for (command_tx, join) in workers {
            // A worker whose handles are all gone has already stopped; the
            // failed send is fine either way.
            let _ = command_tx.send(Command::Shutdown).await;
            join.await.map_err(SyncError::WorkerJoin)?;
        }

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    channel: Option<Arc<dyn Channel>>,
    store: Option<Arc<dyn DurableStore>>,
    preset: Option<NamePreset>,
    config: RuntimeConfig,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            channel: None,
            store: None,
            preset: None,
            config: RuntimeConfig::default(),
        }
    }

    /// Set the transport (required).
    pub fn channel(mut self, channel: impl Channel + 'static) -> Self {
        self.channel = Some(Arc::new(channel));
        self
    }

    /// Set the durable store (required).
    pub fn store(mut self, store: impl DurableStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Seed the shared draft-name preset (optional; defaults to empty).
    pub fn name_preset(mut self, preset: NamePreset) -> Self {
        self.preset = Some(preset);
        self
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let channel = self.channel.ok_or(SyncError::MissingChannel)?;
        let store = self.store.ok_or(SyncError::MissingStore)?;

        let bus = EventBus::with_capacity(self.config.event_buffer_size);

        Ok(Runtime {
            channel,
            store,
            preset: self.preset.unwrap_or_default(),
            bus,
            config: self.config,
            workers: Mutex::new(Vec::new()),
        })
    }
}
