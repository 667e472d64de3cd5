//! Engine error type.
//!
//! Only caller mistakes are errors. An empty deck while refilling and a table
//! without any Set are ordinary game situations and are reported through
//! return values instead.

use thiserror::Error;

use crate::cards::Card;

/// Errors raised by the engine, the session controller and snapshots.
#[derive(Debug, Error)]
pub enum SetError {
    /// A validity check was asked for a number of cards other than three.
    #[error("expected {expected} cards, found {found}")]
    InvalidArgument { expected: usize, found: usize },

    /// A card was referenced that is not currently on the table.
    #[error("card {0} is not on the table")]
    CardNotOnTable(Card),

    /// The same card was given twice where distinct cards are required.
    #[error("card {0} was given more than once")]
    DuplicateCard(Card),

    /// Search time outside the accepted range.
    #[error("search time of {seconds}s is outside [{min}s, {max}s]")]
    SearchTime { seconds: u64, min: u64, max: u64 },

    /// The round has not been resolved yet.
    #[error("the current round is still in progress")]
    RoundInProgress,

    /// The round was already resolved by a found set or a timeout.
    #[error("the current round is already resolved")]
    RoundResolved,

    /// Engine snapshot piles do not add up to one full deck.
    #[error("snapshot holds {found} cards, expected {expected}")]
    IncompleteDeck { expected: usize, found: usize },

    /// Engine snapshot table is larger than a dealt table can be.
    #[error("snapshot table holds {found} cards, at most {max} allowed")]
    TableOverflow { max: usize, found: usize },

    /// Session snapshot round state contradicts its table.
    #[error("inconsistent session snapshot: {0}")]
    InconsistentSession(&'static str),

    /// A snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SetError>;
