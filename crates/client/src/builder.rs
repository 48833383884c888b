//! Client builder with dependency injection pattern.

use crate::Client;
use anyhow::{Context, Result};

use game_core::BoardId;
use runtime::Runtime;

/// Builder for constructing a [`Client`] with proper validation.
///
/// # Design Principles
///
/// - **Required fields**: the runtime and at least one board
/// - **Fail-fast validation**: missing required fields cause build() to fail
/// - **Fluent API**: chainable methods for ergonomic construction
#[derive(Default)]
pub struct ClientBuilder {
    runtime: Option<Runtime>,
    boards: Vec<BoardId>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sync runtime (required).
    ///
    /// The runtime carries the injected channel and store and owns the
    /// per-board workers. Construct it via `Runtime::builder()`.
    pub fn runtime(mut self, runtime: Runtime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Add one board to open on startup.
    pub fn board(mut self, board: BoardId) -> Self {
        self.boards.push(board);
        self
    }

    /// Add several boards to open on startup.
    pub fn boards(mut self, boards: impl IntoIterator<Item = BoardId>) -> Self {
        self.boards.extend(boards);
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime is not set or no board was added.
    pub fn build(self) -> Result<Client> {
        let runtime = self
            .runtime
            .context("Runtime is required. Use .runtime() to set it.")?;

        if self.boards.is_empty() {
            anyhow::bail!("At least one board is required. Use .board() to add one.");
        }

        Ok(Client {
            runtime,
            boards: self.boards,
        })
    }
}
