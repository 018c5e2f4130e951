//! Runtime configuration from environment variables.
//!
//! - `TETRIS_SUPPLY_SEED`: RNG seed (u32). Defaults to a clock-derived seed.
//! - `TETRIS_SUPPLY_LOG_PATH`: append a JSONL action journal to this path.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyConfig {
    pub seed: u32,
    pub log_path: Option<String>,
}

impl Default for SupplyConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            log_path: None,
        }
    }
}

impl SupplyConfig {
    /// Create from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_lookup_with_clock(lookup, clock_seed)
    }

    fn from_lookup_with_clock(
        lookup: impl Fn(&str) -> Option<String>,
        clock: impl FnOnce() -> u32,
    ) -> Self {
        let seed = lookup("TETRIS_SUPPLY_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock);

        let log_path = lookup("TETRIS_SUPPLY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self { seed, log_path }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
