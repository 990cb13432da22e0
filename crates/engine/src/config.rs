//! Session configuration from environment variables.
//!
//! - `TILE_MERGE_GRID_SIZE`: Grid edge length (default: 4, clamped to 1..=8)
//! - `TILE_MERGE_SEED`: RNG seed (default: unset, caller picks one)
//! - `TILE_MERGE_STATE`: Saved state to resume on start (default: unset)
//! - `TILE_MERGE_MAX_TURNS`: Turn cap for headless runs (default: 10000)

use crate::types::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE};

pub const DEFAULT_MAX_TURNS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub grid_size: usize,
    pub seed: Option<u32>,
    pub saved_state: Option<String>,
    pub max_turns: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            seed: None,
            saved_state: None,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; missing or unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let grid_size = lookup("TILE_MERGE_GRID_SIZE")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_GRID_SIZE)
            .clamp(1, MAX_GRID_SIZE);

        let seed = lookup("TILE_MERGE_SEED").and_then(|s| s.trim().parse().ok());

        let saved_state = lookup("TILE_MERGE_STATE")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let max_turns = lookup("TILE_MERGE_MAX_TURNS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_TURNS);

        Self {
            grid_size,
            seed,
            saved_state,
            max_turns,
        }
    }
}
