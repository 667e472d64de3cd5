//! Card model: attributes, the card value type and the 81-card deck.
//!
//! ## Key Types
//!
//! - `Count`, `Symbol`, `Color`, `Fill`: the four three-valued attributes
//! - `Attribute`: shared interface over them
//! - `Card`: immutable value, equality by attributes

pub mod attributes;
pub mod card;

pub use attributes::{all_same_or_all_different, Attribute, Color, Count, Fill, Symbol};
pub use card::{forms_set, Card};
