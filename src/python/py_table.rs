//! Table engine bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::SetError;
use crate::table::{TableEngine, Triplet};

use super::py_cards::{unwrap_cards, PyCard};

/// Map engine errors onto `ValueError`.
pub(crate) fn to_py_err(err: SetError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub(crate) fn triplet_tuple(triplet: Triplet) -> (PyCard, PyCard, PyCard) {
    let [a, b, c] = *triplet.cards();
    (PyCard(a), PyCard(b), PyCard(c))
}

/// Python wrapper for TableEngine.
#[pyclass(name = "TableEngine")]
pub struct PyTableEngine {
    inner: TableEngine,
}

#[pymethods]
impl PyTableEngine {
    /// Shuffle a new deck and deal the table.
    ///
    /// Without a seed the shuffle is seeded from the OS.
    #[new]
    #[pyo3(signature = (seed = None))]
    fn new(seed: Option<u64>) -> Self {
        let inner = match seed {
            Some(seed) => TableEngine::new(seed),
            None => TableEngine::from_entropy(),
        };
        Self { inner }
    }

    /// Deal from an explicit draw pile without shuffling.
    #[staticmethod]
    fn with_deck(cards: Vec<PyCard>) -> PyResult<Self> {
        let inner = TableEngine::with_deck(unwrap_cards(cards)).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Cards currently on the table.
    #[getter]
    fn table(&self) -> Vec<PyCard> {
        self.inner.table().iter().copied().map(PyCard).collect()
    }

    /// Cards left in the draw pile.
    #[getter]
    fn deck_len(&self) -> usize {
        self.inner.deck_len()
    }

    /// Refill the table to 12 cards. Returns the number dealt.
    fn fill_table(&mut self) -> usize {
        self.inner.fill_table()
    }

    /// Remove cards from the table. Raises ValueError if any is absent.
    fn remove_from_table(&mut self, cards: Vec<PyCard>) -> PyResult<()> {
        self.inner
            .remove_from_table(&unwrap_cards(cards))
            .map_err(to_py_err)
    }

    /// Check whether exactly three cards form a Set.
    #[staticmethod]
    fn is_set(cards: Vec<PyCard>) -> PyResult<bool> {
        TableEngine::is_set(&unwrap_cards(cards)).map_err(to_py_err)
    }

    /// All Sets on the table, in index order.
    fn find_all_sets(&self) -> Vec<(PyCard, PyCard, PyCard)> {
        self.inner.find_all_sets().map(triplet_tuple).collect()
    }

    /// First Set on the table, or None.
    fn first_set(&self) -> Option<(PyCard, PyCard, PyCard)> {
        self.inner.first_set().map(triplet_tuple)
    }

    /// Table as an (n, 4) uint8 array of attribute indices.
    fn table_array<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let table = self.inner.table();
        let flat: Vec<u8> = table.iter().flat_map(|card| card.indices()).collect();
        PyArray1::from_vec_bound(py, flat)
            .reshape([table.len(), 4])
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __len__(&self) -> usize {
        self.inner.table().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "TableEngine(table={}, deck={})",
            self.inner.table().len(),
            self.inner.deck_len()
        )
    }
}
