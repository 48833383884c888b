//! Rotile hiscore client binary.
//!
//! Composition root that assembles:
//! 1. A transport channel and a durable store
//! 2. The sync runtime via `Runtime::builder()`
//! 3. The Client container that opens the configured boards
//!
//! The transport wired here is the in-process loopback [`MemoryChannel`];
//! a networked deployment swaps in its own `Channel` implementation at this
//! one spot, everything downstream is transport-agnostic.

use anyhow::Result;

use rotile_client::config::ClientConfig;
use rotile_client::{Client, logging};
use runtime::{FileStore, MemoryChannel, NamePreset, Runtime};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(&config.log_dir())?;

    tracing::info!("Starting Rotile hiscore client");
    tracing::info!("Boards: {:?}", config.boards);
    tracing::info!("Data dir: {}", config.data_dir.display());

    // 3. Build the sync runtime with injected collaborators
    let store = FileStore::new(config.store_dir())?;
    let channel = MemoryChannel::new();

    let mut preset = NamePreset::new();
    if let Some(name) = &config.player_name {
        preset = NamePreset::seeded(name.clone());
    }

    let runtime = Runtime::builder()
        .channel(channel)
        .store(store)
        .name_preset(preset)
        .config(config.runtime.clone())
        .build()?;

    // 4. Assemble and run the client
    let client = Client::builder()
        .runtime(runtime)
        .boards(config.boards.clone())
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
