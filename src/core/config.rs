//! Engine configuration.
//!
//! `MatchConfig` carries the timing and scoring constants of a session:
//! - `match_delay`: how long a matching pair stays up before it is committed
//! - `miss_delay`: how long a mismatched pair stays up before it is turned back
//! - `match_reward`: points awarded per committed pair
//!
//! The defaults are the reference values (1000 ms, 1500 ms, +10).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Reference delay before a matching pair is committed.
pub const DEFAULT_MATCH_DELAY: Duration = Duration::from_millis(1000);

/// Reference delay before a mismatched pair is reverted.
pub const DEFAULT_MISS_DELAY: Duration = Duration::from_millis(1500);

/// Reference score awarded per matched pair.
pub const DEFAULT_MATCH_REWARD: u32 = 10;

/// Timing and scoring configuration for a matching game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Delay between the second flip of a matching pair and its commit.
    pub match_delay: Duration,

    /// Delay between the second flip of a mismatched pair and its revert.
    ///
    /// Must be at least `match_delay` so the player has time to see both faces.
    pub miss_delay: Duration,

    /// Score added when a pair is committed.
    pub match_reward: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            match_delay: DEFAULT_MATCH_DELAY,
            miss_delay: DEFAULT_MISS_DELAY,
            match_reward: DEFAULT_MATCH_REWARD,
        }
    }
}

impl MatchConfig {
    /// Create a configuration with the reference values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the commit delay for matching pairs.
    #[must_use]
    pub fn with_match_delay(mut self, delay: Duration) -> Self {
        self.match_delay = delay;
        self
    }

    /// Set the revert delay for mismatched pairs.
    #[must_use]
    pub fn with_miss_delay(mut self, delay: Duration) -> Self {
        self.miss_delay = delay;
        self
    }

    /// Set the per-pair reward.
    #[must_use]
    pub fn with_match_reward(mut self, reward: u32) -> Self {
        self.match_reward = reward;
        self
    }

    /// Check the configuration for internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.miss_delay < self.match_delay {
            return Err(ConfigError::MissDelayTooShort {
                match_delay: self.match_delay,
                miss_delay: self.miss_delay,
            });
        }
        Ok(())
    }
}
