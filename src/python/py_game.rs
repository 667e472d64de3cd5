//! Game session bindings for Python.

use pyo3::prelude::*;

use crate::core::SessionConfig;
use crate::game::{Advance, GameSession, Phase, Selection, TimeoutOutcome};

use super::py_cards::PyCard;
use super::py_table::{to_py_err, triplet_tuple};

/// Python wrapper for GameSession.
///
/// Events return plain strings describing what happened so a Python
/// front end can drive its own display.
#[pyclass(name = "GameSession")]
pub struct PyGameSession {
    inner: GameSession,
}

#[pymethods]
impl PyGameSession {
    /// Create a session.
    ///
    /// # Arguments
    /// - search_secs: Seconds the player gets per round (5-90)
    /// - seed: RNG seed, or None for an OS-seeded shuffle
    #[new]
    #[pyo3(signature = (search_secs = 30, seed = None))]
    fn new(search_secs: u64, seed: Option<u64>) -> PyResult<Self> {
        let config = SessionConfig::new()
            .with_search_secs(search_secs)
            .map_err(to_py_err)?;
        let inner = match seed {
            Some(seed) => GameSession::new(config, seed),
            None => GameSession::from_entropy(config),
        };
        Ok(Self { inner })
    }

    #[getter]
    fn table(&self) -> Vec<PyCard> {
        self.inner.table().iter().copied().map(PyCard).collect()
    }

    #[getter]
    fn deck_len(&self) -> usize {
        self.inner.engine().deck_len()
    }

    /// (player, computer) points.
    #[getter]
    fn score(&self) -> (u32, u32) {
        let score = self.inner.score();
        (score.player, score.computer)
    }

    #[getter]
    fn selection(&self) -> Vec<PyCard> {
        self.inner.selection().iter().copied().map(PyCard).collect()
    }

    /// One of "searching", "found", "no_sets" or "game_over".
    #[getter]
    fn phase(&self) -> &'static str {
        match self.inner.phase() {
            Phase::Searching => "searching",
            Phase::Found(_) => "found",
            Phase::NoSets { game_over: false } => "no_sets",
            Phase::NoSets { game_over: true } => "game_over",
        }
    }

    /// The Set that resolved the round, if any.
    fn found_set(&self) -> Option<(PyCard, PyCard, PyCard)> {
        match self.inner.phase() {
            Phase::Found(found) => Some(triplet_tuple(found.triplet)),
            _ => None,
        }
    }

    /// Toggle a card. Returns "pending", "found" or "rejected".
    fn select(&mut self, card: PyCard) -> PyResult<&'static str> {
        let result = self.inner.select(card.0).map_err(to_py_err)?;
        Ok(match result {
            Selection::Pending(_) => "pending",
            Selection::Found(_) => "found",
            Selection::Rejected(_) => "rejected",
        })
    }

    /// Report that time ran out. Returns "computer", "no_sets" or "game_over".
    fn timeout(&mut self) -> PyResult<&'static str> {
        let outcome = self.inner.timeout().map_err(to_py_err)?;
        Ok(match outcome {
            TimeoutOutcome::ComputerFound(_) => "computer",
            TimeoutOutcome::NoSets { game_over: false } => "no_sets",
            TimeoutOutcome::NoSets { game_over: true } => "game_over",
        })
    }

    /// Move to the next round. Returns the final score if the game ended.
    fn advance(&mut self) -> PyResult<Option<(u32, u32)>> {
        match self.inner.advance().map_err(to_py_err)? {
            Advance::NextRound => Ok(None),
            Advance::GameOver(score) => Ok(Some((score.player, score.computer))),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "GameSession(round={}, score={}, phase={})",
            self.inner.round(),
            self.inner.score(),
            self.phase()
        )
    }
}
