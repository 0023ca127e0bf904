//! Command-line and environment configuration for the binary.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::types::FRAME_MS;

/// First-person ASCII dungeon crawler.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "ascii-dungeon", version)]
#[command(about = "Explore a generated dungeon in a raycast text view")]
pub struct Config {
    /// Dungeon seed. Skips the start menu when set.
    #[arg(long, env = "DUNGEON_SEED")]
    pub seed: Option<u64>,

    /// Delay between frames in milliseconds
    #[arg(long, env = "DUNGEON_FRAME_MS", default_value_t = FRAME_MS)]
    pub frame_ms: u64,

    /// Write the generated map as text to this file
    #[arg(long, env = "DUNGEON_DUMP_MAP")]
    pub dump_map: Option<PathBuf>,

    /// Write logs to this file (the terminal is in raw mode while playing)
    #[arg(long, env = "DUNGEON_LOG_PATH")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}
