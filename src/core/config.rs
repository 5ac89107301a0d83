//! Engine configuration.
//!
//! The host supplies an `EngineConfig` when creating the engine:
//! - default pair count, for hosts that don't let the player pick one
//! - optional time limit
//! - resolution delay between revealing a pair and flipping/locking it
//!
//! ```
//! use std::time::Duration;
//! use memory_match::core::EngineConfig;
//!
//! let config = EngineConfig::new()
//!     .with_time_limit(25)
//!     .with_resolution_delay(Duration::from_millis(500));
//!
//! assert_eq!(config.pair_count, 4);
//! assert_eq!(config.time_limit_secs, Some(25));
//! assert_eq!(config.resolution_delay(), Duration::from_millis(500));
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Pairs dealt when the host does not ask for a specific count.
pub const DEFAULT_PAIR_COUNT: usize = 4;

/// Pause between the second reveal of a pair and its resolution.
pub const DEFAULT_RESOLUTION_DELAY_MS: u64 = 800;

/// Interval between ticks of the round timer.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Pairs to deal by default.
    pub pair_count: usize,

    /// Round length in seconds. `None` means the round only ends on a win.
    ///
    /// A limit of 0 expires on the first tick.
    pub time_limit_secs: Option<u32>,

    /// Resolution delay in milliseconds.
    pub resolution_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            time_limit_secs: None,
            resolution_delay_ms: DEFAULT_RESOLUTION_DELAY_MS,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the defaults: 4 pairs, no time limit,
    /// 800ms resolution delay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default pair count.
    #[must_use]
    pub fn with_pair_count(mut self, pairs: usize) -> Self {
        self.pair_count = pairs;
        self
    }

    /// Set a time limit in seconds.
    #[must_use]
    pub fn with_time_limit(mut self, secs: u32) -> Self {
        self.time_limit_secs = Some(secs);
        self
    }

    /// Remove the time limit.
    #[must_use]
    pub fn without_time_limit(mut self) -> Self {
        self.time_limit_secs = None;
        self
    }

    /// Set the resolution delay.
    #[must_use]
    pub fn with_resolution_delay(mut self, delay: Duration) -> Self {
        self.resolution_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// The resolution delay as a `Duration`.
    #[must_use]
    pub fn resolution_delay(&self) -> Duration {
        Duration::from_millis(self.resolution_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.pair_count, 4);
        assert_eq!(config.time_limit_secs, None);
        assert_eq!(config.resolution_delay(), Duration::from_millis(800));
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_pair_count(6)
            .with_time_limit(60)
            .with_resolution_delay(Duration::from_millis(250));

        assert_eq!(config.pair_count, 6);
        assert_eq!(config.time_limit_secs, Some(60));
        assert_eq!(config.resolution_delay_ms, 250);

        let config = config.without_time_limit();
        assert_eq!(config.time_limit_secs, None);
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"time_limit_secs": 25}"#).unwrap();
        assert_eq!(config.time_limit_secs, Some(25));
        assert_eq!(config.pair_count, DEFAULT_PAIR_COUNT);
        assert_eq!(config.resolution_delay_ms, DEFAULT_RESOLUTION_DELAY_MS);
    }
}
