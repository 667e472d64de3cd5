//! Core engine types: RNG, configuration, errors.
//!
//! These are shared by the table engine, the session controller and the
//! autoplay driver.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{SessionConfig, DECK_SIZE, MAX_SEARCH_SECS, MIN_SEARCH_SECS, TABLE_SIZE};
pub use error::{Result, SetError};
pub use rng::{GameRng, GameRngState};
