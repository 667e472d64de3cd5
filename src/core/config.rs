//! Engine constants and session configuration.
//!
//! - `TABLE_SIZE` / `DECK_SIZE`: fixed dimensions of a game of Set
//! - `SessionConfig`: per-game settings owned by the control loop

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{Result, SetError};

/// Number of cards the table is refilled to.
pub const TABLE_SIZE: usize = 12;

/// Number of distinct cards (3^4).
pub const DECK_SIZE: usize = 81;

/// Shortest accepted search time, in seconds.
pub const MIN_SEARCH_SECS: u64 = 5;

/// Longest accepted search time, in seconds.
pub const MAX_SEARCH_SECS: u64 = 90;

/// Configuration for a [`GameSession`](crate::game::GameSession).
///
/// The search time is how long a human gets to find a set before the
/// computer takes its turn. The session never reads a clock itself; the
/// control loop compares elapsed time with [`SessionConfig::search_time`]
/// and reports a timeout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    search_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { search_secs: 30 }
    }
}

impl SessionConfig {
    /// Create a configuration with the default search time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search time in whole seconds.
    ///
    /// Fails unless `MIN_SEARCH_SECS <= seconds <= MAX_SEARCH_SECS`.
    pub fn with_search_secs(mut self, seconds: u64) -> Result<Self> {
        if !(MIN_SEARCH_SECS..=MAX_SEARCH_SECS).contains(&seconds) {
            return Err(SetError::SearchTime {
                seconds,
                min: MIN_SEARCH_SECS,
                max: MAX_SEARCH_SECS,
            });
        }
        self.search_secs = seconds;
        Ok(self)
    }

    /// Search time in whole seconds.
    #[must_use]
    pub fn search_secs(&self) -> u64 {
        self.search_secs
    }

    /// Search time as a duration.
    #[must_use]
    pub fn search_time(&self) -> Duration {
        Duration::from_secs(self.search_secs)
    }

    /// Whole seconds left after `elapsed`, rounded up; `None` once time is up.
    #[must_use]
    pub fn seconds_left(&self, elapsed: Duration) -> Option<u64> {
        let remaining = self.search_time().checked_sub(elapsed)?;
        let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
        Some(secs)
    }
}
