//! The four card attributes of Set.
//!
//! Every attribute has exactly three values. The engine only ever compares
//! values for equality, so the order of `ALL` is just the order used when
//! the deck is generated.

use serde::{Deserialize, Serialize};

/// Common interface over the four attribute enums.
pub trait Attribute: Copy + Eq + std::hash::Hash + std::fmt::Debug + 'static {
    /// Every value of this attribute, in deck-generation order.
    const ALL: [Self; 3];

    /// Position of this value within `ALL` (0, 1 or 2).
    fn index(self) -> u8;

    /// Lower-case name used in card keys.
    fn name(self) -> &'static str;

    /// Look up a value by its position within `ALL`.
    fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Look up a value by its card-key name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|value| value.name() == name)
    }
}

/// Number of symbols printed on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Count {
    One,
    Two,
    Three,
}

/// Shape of the printed symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    Diamond,
    Oval,
    Squiggle,
}

/// Ink colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Purple,
}

/// Shading of the symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Fill {
    Empty,
    Filled,
    Shaded,
}

impl Attribute for Count {
    const ALL: [Self; 3] = [Count::One, Count::Two, Count::Three];

    fn index(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        match self {
            Count::One => "1",
            Count::Two => "2",
            Count::Three => "3",
        }
    }
}

impl Count {
    /// Numeric value (1, 2 or 3).
    #[must_use]
    pub fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`Count::value`].
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        value.checked_sub(1).and_then(Self::from_index)
    }
}

impl Attribute for Symbol {
    const ALL: [Self; 3] = [Symbol::Diamond, Symbol::Oval, Symbol::Squiggle];

    fn index(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        match self {
            Symbol::Diamond => "diamond",
            Symbol::Oval => "oval",
            Symbol::Squiggle => "squiggle",
        }
    }
}

impl Attribute for Color {
    const ALL: [Self; 3] = [Color::Red, Color::Green, Color::Purple];

    fn index(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Purple => "purple",
        }
    }
}

impl Attribute for Fill {
    const ALL: [Self; 3] = [Fill::Empty, Fill::Filled, Fill::Shaded];

    fn index(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        match self {
            Fill::Empty => "empty",
            Fill::Filled => "filled",
            Fill::Shaded => "shaded",
        }
    }
}

/// True when three values are all equal or pairwise distinct.
///
/// With three-valued attributes this is the same as "not exactly two
/// distinct values".
#[inline]
#[must_use]
pub fn all_same_or_all_different<A: Attribute>(a: A, b: A, c: A) -> bool {
    let same = a == b && b == c;
    let different = a != b && b != c && a != c;
    same || different
}
