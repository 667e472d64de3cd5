//! The card value type and deck generation.

use serde::{Deserialize, Serialize};

use crate::core::config::DECK_SIZE;

use super::attributes::{all_same_or_all_different, Attribute, Color, Count, Fill, Symbol};

/// A Set card.
///
/// Cards are plain values: two cards with the same attributes are the same
/// card. A generated deck never contains duplicates, so equality is enough
/// to find a card on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub count: Count,
    pub symbol: Symbol,
    pub color: Color,
    pub fill: Fill,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(count: Count, symbol: Symbol, color: Color, fill: Fill) -> Self {
        Self {
            count,
            symbol,
            color,
            fill,
        }
    }

    /// All 81 cards, in a fixed order (count, then symbol, then colour, then fill).
    ///
    /// ```
    /// use set_engine::cards::Card;
    ///
    /// let deck = Card::new_deck();
    /// assert_eq!(deck.len(), 81);
    /// ```
    #[must_use]
    pub fn new_deck() -> Vec<Card> {
        let mut deck = Vec::with_capacity(DECK_SIZE);
        for count in Count::ALL {
            for symbol in Symbol::ALL {
                for color in Color::ALL {
                    for fill in Fill::ALL {
                        deck.push(Card::new(count, symbol, color, fill));
                    }
                }
            }
        }
        deck
    }

    /// Attribute indices as `[count, symbol, color, fill]`.
    #[must_use]
    pub fn indices(&self) -> [u8; 4] {
        [
            self.count.index(),
            self.symbol.index(),
            self.color.index(),
            self.fill.index(),
        ]
    }

    /// Build a card from attribute indices, `None` if any index is out of range.
    #[must_use]
    pub fn from_indices(indices: [u8; 4]) -> Option<Self> {
        Some(Self::new(
            Count::from_index(indices[0])?,
            Symbol::from_index(indices[1])?,
            Color::from_index(indices[2])?,
            Fill::from_index(indices[3])?,
        ))
    }

    /// Position of this card within [`Card::new_deck`] (0..81).
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.indices()
            .iter()
            .fold(0, |acc, &i| acc * 3 + usize::from(i))
    }
}

impl std::fmt::Display for Card {
    /// Colour, symbol, fill and count, e.g. `reddiamondempty1`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.color.name(),
            self.symbol.name(),
            self.fill.name(),
            self.count.name()
        )
    }
}

/// True when the three cards form a Set.
///
/// For every attribute the three values must be all equal or all distinct.
/// Argument order does not matter.
#[must_use]
pub fn forms_set(a: &Card, b: &Card, c: &Card) -> bool {
    all_same_or_all_different(a.count, b.count, c.count)
        && all_same_or_all_different(a.symbol, b.symbol, c.symbol)
        && all_same_or_all_different(a.color, b.color, c.color)
        && all_same_or_all_different(a.fill, b.fill, c.fill)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_new_deck_is_complete() {
        let deck = Card::new_deck();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: FxHashSet<_> = deck.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);

        for count in Count::ALL {
            for symbol in Symbol::ALL {
                for color in Color::ALL {
                    for fill in Fill::ALL {
                        assert!(unique.contains(&Card::new(count, symbol, color, fill)));
                    }
                }
            }
        }
    }

    #[test]
    fn test_rebuild_from_values_and_names() {
        for card in Card::new_deck() {
            let rebuilt = Card::new(
                Count::from_value(card.count.value()).unwrap(),
                Symbol::from_name(card.symbol.name()).unwrap(),
                Color::from_name(card.color.name()).unwrap(),
                Fill::from_name(card.fill.name()).unwrap(),
            );
            assert_eq!(rebuilt, card);
        }
    }

    #[test]
    fn test_new_deck_is_deterministic() {
        assert_eq!(Card::new_deck(), Card::new_deck());
    }

    #[test]
    fn test_ordinal_matches_deck_position() {
        for (i, card) in Card::new_deck().iter().enumerate() {
            assert_eq!(card.ordinal(), i);
        }
    }

    #[test]
    fn test_indices_roundtrip() {
        let card = Card::new(Count::Three, Symbol::Oval, Color::Purple, Fill::Empty);
        assert_eq!(card.indices(), [2, 1, 2, 0]);
        assert_eq!(Card::from_indices([2, 1, 2, 0]), Some(card));
        assert_eq!(Card::from_indices([0, 0, 3, 0]), None);
    }

    #[test]
    fn test_display() {
        let card = Card::new(Count::One, Symbol::Diamond, Color::Red, Fill::Empty);
        assert_eq!(card.to_string(), "reddiamondempty1");

        let card = Card::new(Count::Three, Symbol::Squiggle, Color::Purple, Fill::Shaded);
        assert_eq!(card.to_string(), "purplesquiggleshaded3");
    }

    #[test]
    fn test_forms_set_examples() {
        let a = Card::new(Count::One, Symbol::Diamond, Color::Red, Fill::Empty);
        let b = Card::new(Count::Two, Symbol::Diamond, Color::Red, Fill::Empty);
        let c = Card::new(Count::Three, Symbol::Diamond, Color::Red, Fill::Empty);
        assert!(forms_set(&a, &b, &c));

        // Count has exactly two distinct values
        let d = Card::new(Count::Two, Symbol::Oval, Color::Red, Fill::Empty);
        assert!(!forms_set(&a, &b, &d));

        // Everything different
        let e = Card::new(Count::One, Symbol::Diamond, Color::Red, Fill::Empty);
        let f = Card::new(Count::Two, Symbol::Oval, Color::Green, Fill::Filled);
        let g = Card::new(Count::Three, Symbol::Squiggle, Color::Purple, Fill::Shaded);
        assert!(forms_set(&e, &f, &g));
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(Count::Two, Symbol::Oval, Color::Green, Fill::Filled);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
