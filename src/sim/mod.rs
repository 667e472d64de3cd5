//! Autoplay: full games against a simulated player, with statistics.
//!
//! ## Usage
//!
//! ```
//! use set_engine::sim::{AutoplayConfig, AutoplayRunner};
//!
//! let runner = AutoplayRunner::new(AutoplayConfig::new().with_games(3).with_skill(0.6));
//! let (records, stats) = runner.run().unwrap();
//!
//! assert_eq!(records.len(), 3);
//! assert_eq!(stats.games, 3);
//! ```

mod autoplay;
mod stats;

pub use autoplay::{AutoplayConfig, AutoplayRunner};
pub use stats::{AutoplayStats, GameRecord};
