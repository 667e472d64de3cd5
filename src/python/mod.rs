//! Python bindings for the Set engine.
//!
//! # Quick Start
//!
//! ```python
//! import set_engine
//!
//! engine = set_engine.TableEngine(seed=42)
//! found = engine.first_set()
//! if found is not None:
//!     engine.remove_from_table(list(found))
//!     engine.fill_table()
//!
//! features = engine.table_array()  # (12, 4) uint8
//! ```

use pyo3::prelude::*;

mod py_cards;
mod py_game;
mod py_table;

pub use py_cards::*;
pub use py_game::*;
pub use py_table::*;

/// set_engine: rules engine for the card game Set.
#[pymodule]
fn set_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyTableEngine>()?;
    m.add_class::<PyGameSession>()?;
    Ok(())
}
