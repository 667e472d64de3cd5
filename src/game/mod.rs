//! Player-versus-computer game flow on top of the table engine.
//!
//! `GameSession` is the explicit state a control loop owns: scores, the
//! player's selection and the phase of the current round.

mod session;

pub use session::{
    Advance, Finder, FoundSet, GameSession, Phase, Score, Selection, SessionSnapshot,
    TimeoutOutcome,
};
