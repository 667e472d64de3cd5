//! Card bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{Attribute, Card, Color, Count, Fill, Symbol};

/// Python wrapper for Card.
///
/// The constructor and the getters share one convention: `count` is the
/// number of symbols (1-3), the other attributes are their lower-case names.
/// `from_indices` and `indices` use positions 0-2 throughout.
#[pyclass(name = "Card", frozen)]
#[derive(Clone, Copy, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Create a card, e.g. `Card(2, "oval", "green", "shaded")`.
    #[new]
    fn new(count: u8, symbol: &str, color: &str, fill: &str) -> PyResult<Self> {
        let count = Count::from_value(count)
            .ok_or_else(|| PyValueError::new_err(format!("count must be 1, 2 or 3, got {count}")))?;
        Ok(Self(Card::new(
            count,
            lookup::<Symbol>("symbol", symbol)?,
            lookup::<Color>("color", color)?,
            lookup::<Fill>("fill", fill)?,
        )))
    }

    /// Create a card from attribute indices (count, symbol, color, fill).
    #[staticmethod]
    fn from_indices(count: u8, symbol: u8, color: u8, fill: u8) -> PyResult<Self> {
        Card::from_indices([count, symbol, color, fill])
            .map(Self)
            .ok_or_else(|| PyValueError::new_err("attribute indices must be 0, 1 or 2"))
    }

    /// All 81 cards in deck order.
    #[staticmethod]
    fn new_deck() -> Vec<Self> {
        Card::new_deck().into_iter().map(Self).collect()
    }

    #[getter]
    fn count(&self) -> u8 {
        self.0.count.value()
    }

    #[getter]
    fn symbol(&self) -> &'static str {
        self.0.symbol.name()
    }

    #[getter]
    fn color(&self) -> &'static str {
        self.0.color.name()
    }

    #[getter]
    fn fill(&self) -> &'static str {
        self.0.fill.name()
    }

    /// Attribute indices as a tuple.
    fn indices(&self) -> (u8, u8, u8, u8) {
        let [a, b, c, d] = self.0.indices();
        (a, b, c, d)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Card({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.ordinal() as u64
    }
}

fn lookup<A: Attribute>(attribute: &str, name: &str) -> PyResult<A> {
    A::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = A::ALL.iter().map(|value| value.name()).collect();
        PyValueError::new_err(format!(
            "unknown {attribute} {name:?}, expected one of {}",
            known.join(", ")
        ))
    })
}

/// Unwrap a list of Python cards.
pub(crate) fn unwrap_cards(cards: Vec<PyCard>) -> Vec<Card> {
    cards.into_iter().map(|c| c.0).collect()
}
