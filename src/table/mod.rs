//! Table maintenance and Set search.
//!
//! - `TableEngine`: owns deck, table and discard pile; validates and searches
//! - `SetSearch`: lazy enumeration of the Sets on a table snapshot
//! - `Triplet`: three cards from the table
//! - `EngineSnapshot`: serializable engine state

pub mod engine;
pub mod search;
pub mod snapshot;

pub use engine::TableEngine;
pub use search::{candidate_count, SetSearch, Triplet};
pub use snapshot::EngineSnapshot;
