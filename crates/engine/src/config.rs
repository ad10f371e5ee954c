//! Runtime configuration read from environment variables.
//!
//! - `BLOCKFALL_TICK_MS`: gravity interval in milliseconds (default: 500)
//! - `BLOCKFALL_SEED`: shape sequence seed (default: derived from the clock)
//! - `BLOCKFALL_LOG_PATH`: log file; logging is off when unset or empty
//! - `BLOCKFALL_LOG_LEVEL`: `error`, `warn`, `info`, `debug` or `trace` (default: `info`)
//!
//! Unparseable values fall back to the default.

use std::env;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::LevelFilter;

use crate::types::DEFAULT_TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tick_ms: u32,
    pub seed: u64,
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            seed: clock_seed(),
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_ms = lookup("BLOCKFALL_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let log_level = lookup("BLOCKFALL_LOG_LEVEL")
            .and_then(|s| LevelFilter::from_str(s.trim()).ok())
            .unwrap_or(defaults.log_level);

        Self {
            tick_ms,
            seed,
            log_path,
            log_level,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
