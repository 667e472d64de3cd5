//! Triplets and the exhaustive search for Sets on a table.
//!
//! [`SetSearch`] walks every 3-element subset of a table snapshot in index
//! order: `(0,1,2), (0,1,3), ..., (0,1,n-1), (0,2,3), ...`. It yields only
//! the subsets that form a Set. A table of 12 cards has 220 candidates.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{forms_set, Card};

/// Three distinct cards taken from the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triplet([Card; 3]);

impl Triplet {
    /// Create a triplet. The cards are kept in the given order.
    #[must_use]
    pub const fn new(a: Card, b: Card, c: Card) -> Self {
        Self([a, b, c])
    }

    /// The three cards.
    #[must_use]
    pub fn cards(&self) -> &[Card; 3] {
        &self.0
    }

    /// Does the triplet form a Set?
    #[must_use]
    pub fn is_set(&self) -> bool {
        let [a, b, c] = &self.0;
        forms_set(a, b, c)
    }

    /// Is `card` one of the three?
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }

    /// Same cards regardless of order.
    #[must_use]
    pub fn same_cards(&self, other: &Triplet) -> bool {
        other.0.iter().all(|card| self.contains(card))
    }
}

impl From<[Card; 3]> for Triplet {
    fn from(cards: [Card; 3]) -> Self {
        Self(cards)
    }
}

impl IntoIterator for Triplet {
    type Item = Card;
    type IntoIter = std::array::IntoIter<Card, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl std::fmt::Display for Triplet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.0[0], self.0[1], self.0[2])
    }
}

/// Lazy iterator over all Sets on a table snapshot.
///
/// The snapshot is taken when the search is created (an O(1) clone of the
/// persistent table), so later table mutations are not observed. Once the
/// table changes, start a new search.
#[derive(Clone, Debug)]
pub struct SetSearch {
    cards: Vector<Card>,
    i: usize,
    j: usize,
    k: usize,
}

impl SetSearch {
    /// Search the given cards.
    #[must_use]
    pub fn new(cards: Vector<Card>) -> Self {
        Self {
            cards,
            i: 0,
            j: 1,
            k: 2,
        }
    }

    /// Number of cards in the snapshot.
    #[must_use]
    pub fn table_len(&self) -> usize {
        self.cards.len()
    }

    /// Advance `(i, j, k)` to the next combination in index order.
    fn step(&mut self) {
        let n = self.cards.len();
        self.k += 1;
        if self.k < n {
            return;
        }
        self.j += 1;
        if self.j + 1 < n {
            self.k = self.j + 1;
            return;
        }
        self.i += 1;
        self.j = self.i + 1;
        self.k = self.i + 2;
    }
}

impl Iterator for SetSearch {
    type Item = Triplet;

    fn next(&mut self) -> Option<Triplet> {
        while self.k < self.cards.len() {
            let (a, b, c) = (self.cards[self.i], self.cards[self.j], self.cards[self.k]);
            self.step();
            if forms_set(&a, &b, &c) {
                log::trace!("found set {} {} {}", a, b, c);
                return Some(Triplet::new(a, b, c));
            }
        }
        None
    }
}

impl std::iter::FusedIterator for SetSearch {}

/// Number of 3-card subsets of `n` cards.
#[must_use]
pub fn candidate_count(n: usize) -> usize {
    if n < 3 {
        0
    } else {
        n * (n - 1) * (n - 2) / 6
    }
}
