//! Client configuration structures and loaders.

use std::env;
use std::path::PathBuf;

use game_core::BoardId;
use runtime::RuntimeConfig;

/// Configuration required to bootstrap the client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Boards whose leaderboards are opened on startup.
    pub boards: Vec<BoardId>,

    /// Directory holding persisted hiscores and logs.
    pub data_dir: PathBuf,

    /// Pre-seed for the draft-name preset (e.g. from a previous install).
    pub player_name: Option<String>,

    pub runtime: RuntimeConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            boards: vec![BoardId::new("1")],
            data_dir: default_data_dir(),
            player_name: None,
            runtime: RuntimeConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ROTILE_BOARDS` - Comma-separated board ids to open (default: "1")
    /// - `ROTILE_DATA_DIR` - Directory for hiscores and logs (default:
    ///   platform data dir)
    /// - `ROTILE_PLAYER_NAME` - Initial draft-name preset (default: empty)
    /// - `SYNC_COMMAND_BUFFER` - Per-board command queue size (default: 32)
    /// - `SYNC_EVENT_CAPACITY` - Event bus capacity per topic (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(boards) = env::var("ROTILE_BOARDS") {
            let parsed: Vec<BoardId> = boards
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(BoardId::new)
                .collect();
            if !parsed.is_empty() {
                config.boards = parsed;
            }
        }

        if let Some(dir) = env::var_os("ROTILE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config.player_name = env::var("ROTILE_PLAYER_NAME").ok();

        if let Some(size) = read_env::<usize>("SYNC_COMMAND_BUFFER") {
            config.runtime.command_buffer_size = size.max(1);
        }
        if let Some(capacity) = read_env::<usize>("SYNC_EVENT_CAPACITY") {
            config.runtime.event_buffer_size = capacity.max(1);
        }

        config
    }

    /// Directory for the durable hiscore store.
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("hiscores")
    }

    /// Directory for log files.
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

/// Platform data directory, with a local fallback for odd environments.
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "rotile")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".rotile"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
