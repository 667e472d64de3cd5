//! # set-engine
//!
//! Rules engine for the card game Set.
//!
//! 81 cards each carry four attributes with three values apiece. Twelve
//! cards lie on the table; three cards form a Set when, for every attribute,
//! their values are all the same or all different.
//!
//! ## Design Principles
//!
//! 1. **Cards are values**: a `Card` is its attributes, nothing more.
//!
//! 2. **One owner for the piles**: deck, table and discard pile live in a
//!    `TableEngine` and change only through `fill_table` and
//!    `remove_from_table`.
//!
//! 3. **No ambient state**: the round and score state a front end needs is an
//!    explicit `GameSession` value, not globals. Clocks and rendering stay
//!    outside the crate.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: `im::Vector` piles make engine clones
//!   and search snapshots O(1).
//!
//! - **Deterministic RNG**: seeded ChaCha8 shuffles make every deal
//!   reproducible and checkpointable.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: attributes, cards, deck generation
//! - `table`: the table engine, triplets and Set search
//! - `game`: player-versus-computer sessions
//! - `sim`: autoplay and statistics

pub mod core;
pub mod cards;
pub mod table;
pub mod game;
pub mod sim;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState, Result, SessionConfig, SetError, DECK_SIZE, TABLE_SIZE,
};

pub use crate::cards::{Attribute, Card, Color, Count, Fill, Symbol};

pub use crate::table::{EngineSnapshot, SetSearch, TableEngine, Triplet};

pub use crate::game::{
    Advance, Finder, FoundSet, GameSession, Phase, Score, Selection, SessionSnapshot,
    TimeoutOutcome,
};

pub use crate::sim::{AutoplayConfig, AutoplayRunner, AutoplayStats, GameRecord};
