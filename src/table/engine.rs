//! The table engine: draw pile, visible table and discard pile.
//!
//! ## Invariants
//!
//! - `deck`, `table` and `discarded` are pairwise disjoint and together hold
//!   every card the engine was built from.
//! - The table never holds duplicates.
//! - Cards only move deck -> table (`fill_table`) and table -> discard
//!   (`remove_from_table`). Discarded cards never come back.

use im::Vector;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::cards::{forms_set, Card};
use crate::core::config::{DECK_SIZE, TABLE_SIZE};
use crate::core::error::{Result, SetError};
use crate::core::rng::GameRng;

use super::search::{candidate_count, SetSearch, Triplet};
use super::snapshot::EngineSnapshot;

/// Owner of the deck and the table for one game.
///
/// Uses `im` persistent vectors, so cloning an engine or starting a search
/// is O(1).
///
/// ## Usage
///
/// ```
/// use set_engine::table::TableEngine;
///
/// let mut engine = TableEngine::new(42);
/// assert_eq!(engine.table().len(), 12);
/// assert_eq!(engine.deck_len(), 69);
///
/// if let Some(set) = engine.first_set() {
///     engine.remove_from_table(set.cards()).unwrap();
///     engine.fill_table();
///     assert_eq!(engine.table().len(), 12);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct TableEngine {
    deck: Vector<Card>,
    table: Vector<Card>,
    discarded: Vector<Card>,
}

impl TableEngine {
    /// Build a full deck, shuffle it with a seeded RNG and deal the table.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::shuffled(&mut GameRng::new(seed))
    }

    /// Build a full deck shuffled with an OS-seeded RNG and deal the table.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::shuffled(&mut GameRng::from_entropy())
    }

    /// Build a full deck, shuffle it with `rng` and deal the table.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Card::new_deck();
        rng.shuffle(&mut deck);
        log::debug!("shuffled new deck (seed {})", rng.seed());

        let mut engine = Self {
            deck: deck.into_iter().collect(),
            table: Vector::new(),
            discarded: Vector::new(),
        };
        engine.fill_table();
        engine
    }

    /// Deal from an explicit, unshuffled draw pile (front is dealt first).
    ///
    /// Fails with [`SetError::DuplicateCard`] if a card appears twice.
    pub fn with_deck(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        let mut deck = Vector::new();
        for card in cards {
            if !seen.insert(card) {
                return Err(SetError::DuplicateCard(card));
            }
            deck.push_back(card);
        }

        let mut engine = Self {
            deck,
            table: Vector::new(),
            discarded: Vector::new(),
        };
        engine.fill_table();
        Ok(engine)
    }

    // === Queries ===

    /// Cards currently visible, in table order.
    #[must_use]
    pub fn table(&self) -> &Vector<Card> {
        &self.table
    }

    /// Remaining draw pile, front first.
    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    /// Cards permanently removed from play.
    #[must_use]
    pub fn discarded(&self) -> &Vector<Card> {
        &self.discarded
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Has the draw pile run out?
    #[must_use]
    pub fn is_deck_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Is `card` on the table?
    #[must_use]
    pub fn on_table(&self, card: &Card) -> bool {
        self.table.contains(card)
    }

    // === Mutations ===

    /// Top the table up to [`TABLE_SIZE`] cards from the front of the deck.
    ///
    /// Existing cards keep their positions; new cards are appended. When the
    /// deck runs short the table simply stays smaller. Returns the number of
    /// cards dealt.
    pub fn fill_table(&mut self) -> usize {
        let missing = TABLE_SIZE.saturating_sub(self.table.len());
        let dealt = missing.min(self.deck.len());
        if dealt == 0 {
            return 0;
        }

        let rest = self.deck.split_off(dealt);
        let drawn = std::mem::replace(&mut self.deck, rest);
        self.table.append(drawn);

        log::debug!(
            "dealt {} cards: table {}, deck {}",
            dealt,
            self.table.len(),
            self.deck.len()
        );
        dealt
    }

    /// Remove the given cards from the table into the discard pile.
    ///
    /// All-or-nothing: every card is checked first, and on error the table
    /// is left untouched.
    ///
    /// Fails with [`SetError::CardNotOnTable`] for an absent card and
    /// [`SetError::DuplicateCard`] if a card is listed twice.
    pub fn remove_from_table(&mut self, cards: &[Card]) -> Result<()> {
        let mut positions: SmallVec<[usize; 3]> = SmallVec::with_capacity(cards.len());
        for card in cards {
            let index = self
                .table
                .index_of(card)
                .ok_or(SetError::CardNotOnTable(*card))?;
            if positions.contains(&index) {
                return Err(SetError::DuplicateCard(*card));
            }
            positions.push(index);
        }

        // Highest index first so earlier positions stay valid
        positions.sort_unstable_by(|a, b| b.cmp(a));
        for index in positions {
            let card = self.table.remove(index);
            self.discarded.push_back(card);
        }

        log::debug!(
            "removed {} cards: table {}, discarded {}",
            cards.len(),
            self.table.len(),
            self.discarded.len()
        );
        Ok(())
    }

    // === Set logic ===

    /// Do exactly three cards form a Set?
    ///
    /// Fails with [`SetError::InvalidArgument`] unless `cards.len() == 3`.
    /// Order is irrelevant; duplicate inputs are not special-cased.
    pub fn is_set(cards: &[Card]) -> Result<bool> {
        match cards {
            [a, b, c] => Ok(forms_set(a, b, c)),
            _ => Err(SetError::InvalidArgument {
                expected: 3,
                found: cards.len(),
            }),
        }
    }

    /// Lazily enumerate all Sets on the current table in index order.
    ///
    /// The search works on a snapshot of the table taken now.
    #[must_use]
    pub fn find_all_sets(&self) -> SetSearch {
        SetSearch::new(self.table.clone())
    }

    /// First Set in index order, if any.
    #[must_use]
    pub fn first_set(&self) -> Option<Triplet> {
        self.find_all_sets().next()
    }

    /// Number of Sets on the table.
    #[must_use]
    pub fn count_sets(&self) -> usize {
        self.find_all_sets().count()
    }

    /// Number of triplets a search would examine.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        candidate_count(self.table.len())
    }

    // === Snapshots ===

    /// Capture the deck, table and discard pile.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            deck: self.deck.iter().copied().collect(),
            table: self.table.iter().copied().collect(),
            discarded: self.discarded.iter().copied().collect(),
        }
    }

    /// Rebuild an engine from a snapshot.
    ///
    /// Fails with [`SetError::DuplicateCard`] if any card appears in more
    /// than one place, [`SetError::IncompleteDeck`] unless the piles hold
    /// exactly [`DECK_SIZE`] cards, and [`SetError::TableOverflow`] if the
    /// table holds more than [`TABLE_SIZE`].
    pub fn restore(snapshot: &EngineSnapshot) -> Result<Self> {
        let mut seen = FxHashSet::default();
        let all = snapshot
            .deck
            .iter()
            .chain(&snapshot.table)
            .chain(&snapshot.discarded);
        for card in all {
            if !seen.insert(*card) {
                return Err(SetError::DuplicateCard(*card));
            }
        }

        // Distinct cards, so a full count means every card is accounted for
        if seen.len() != DECK_SIZE {
            return Err(SetError::IncompleteDeck {
                expected: DECK_SIZE,
                found: seen.len(),
            });
        }
        if snapshot.table.len() > TABLE_SIZE {
            return Err(SetError::TableOverflow {
                max: TABLE_SIZE,
                found: snapshot.table.len(),
            });
        }

        Ok(Self {
            deck: snapshot.deck.iter().copied().collect(),
            table: snapshot.table.iter().copied().collect(),
            discarded: snapshot.discarded.iter().copied().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Count, Fill, Symbol};
    use crate::core::config::DECK_SIZE;

    fn red_diamond_empty(count: Count) -> Card {
        Card::new(count, Symbol::Diamond, Color::Red, Fill::Empty)
    }

    fn assert_partition(engine: &TableEngine) {
        let mut all: Vec<Card> = engine
            .deck()
            .iter()
            .chain(engine.table().iter())
            .chain(engine.discarded().iter())
            .copied()
            .collect();
        assert_eq!(all.len(), DECK_SIZE);
        all.sort();
        all.dedup();
        assert_eq!(all.len(), DECK_SIZE);
    }

    #[test]
    fn test_new_deals_twelve() {
        let engine = TableEngine::new(42);
        assert_eq!(engine.table().len(), 12);
        assert_eq!(engine.deck_len(), 69);
        assert!(engine.discarded().is_empty());
        assert_partition(&engine);
    }

    #[test]
    fn test_same_seed_same_table() {
        let a = TableEngine::new(7);
        let b = TableEngine::new(7);
        let c = TableEngine::new(8);
        assert_eq!(a.table(), b.table());
        assert_eq!(a.deck(), b.deck());
        assert_ne!(a.table(), c.table());
    }

    #[test]
    fn test_from_entropy_deals_twelve() {
        let engine = TableEngine::from_entropy();
        assert_eq!(engine.table().len(), 12);
        assert_partition(&engine);
    }

    #[test]
    fn test_fill_is_noop_when_full() {
        let mut engine = TableEngine::new(1);
        let before = engine.table().clone();
        assert_eq!(engine.fill_table(), 0);
        assert_eq!(engine.table(), &before);
        assert_eq!(engine.deck_len(), 69);
    }

    #[test]
    fn test_fill_appends_from_front_of_deck() {
        let mut engine = TableEngine::new(3);
        let removed = [engine.table()[0], engine.table()[5], engine.table()[11]];
        let next: Vec<Card> = engine.deck().iter().take(3).copied().collect();
        let kept: Vec<Card> = engine
            .table()
            .iter()
            .filter(|c| !removed.contains(c))
            .copied()
            .collect();

        engine.remove_from_table(&removed).unwrap();
        assert_eq!(engine.fill_table(), 3);

        let table: Vec<Card> = engine.table().iter().copied().collect();
        assert_eq!(&table[..9], kept.as_slice());
        assert_eq!(&table[9..], next.as_slice());
        assert_partition(&engine);
    }

    #[test]
    fn test_fill_with_short_deck() {
        let deck: Vec<Card> = Card::new_deck().into_iter().take(14).collect();
        let mut engine = TableEngine::with_deck(deck.clone()).unwrap();
        assert_eq!(engine.table().len(), 12);
        assert_eq!(engine.deck_len(), 2);

        let triplet: Vec<Card> = engine.table().iter().take(3).copied().collect();
        engine.remove_from_table(&triplet).unwrap();
        assert_eq!(engine.fill_table(), 2);
        assert_eq!(engine.table().len(), 11);
        assert!(engine.is_deck_empty());

        // Repeated fills on an empty deck change nothing
        let before = engine.table().clone();
        assert_eq!(engine.fill_table(), 0);
        assert_eq!(engine.table(), &before);
    }

    #[test]
    fn test_with_deck_rejects_duplicates() {
        let card = red_diamond_empty(Count::One);
        let result = TableEngine::with_deck([card, red_diamond_empty(Count::Two), card]);
        assert!(matches!(result, Err(SetError::DuplicateCard(c)) if c == card));
    }

    #[test]
    fn test_remove_missing_card_is_atomic() {
        let mut engine = TableEngine::new(5);
        let present = engine.table()[0];
        let absent = engine.deck()[0];
        let before = engine.table().clone();

        let result = engine.remove_from_table(&[present, absent]);
        assert!(matches!(result, Err(SetError::CardNotOnTable(c)) if c == absent));
        assert_eq!(engine.table(), &before);
        assert!(engine.discarded().is_empty());
    }

    #[test]
    fn test_remove_duplicate_request_is_rejected() {
        let mut engine = TableEngine::new(5);
        let card = engine.table()[2];
        let before = engine.table().clone();

        let result = engine.remove_from_table(&[card, card]);
        assert!(matches!(result, Err(SetError::DuplicateCard(c)) if c == card));
        assert_eq!(engine.table(), &before);
    }

    #[test]
    fn test_remove_moves_cards_to_discard() {
        let mut engine = TableEngine::new(9);
        let cards = [engine.table()[1], engine.table()[4], engine.table()[7]];

        engine.remove_from_table(&cards).unwrap();

        assert_eq!(engine.table().len(), 9);
        for card in &cards {
            assert!(!engine.on_table(card));
            assert!(engine.discarded().contains(card));
        }
        assert_partition(&engine);
    }

    #[test]
    fn test_is_set_requires_three_cards() {
        let deck = Card::new_deck();
        assert!(matches!(
            TableEngine::is_set(&deck[..2]),
            Err(SetError::InvalidArgument {
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            TableEngine::is_set(&deck[..4]),
            Err(SetError::InvalidArgument { found: 4, .. })
        ));
        assert!(TableEngine::is_set(&[]).is_err());
    }

    #[test]
    fn test_is_set_examples() {
        let a = red_diamond_empty(Count::One);
        let b = red_diamond_empty(Count::Two);
        let c = red_diamond_empty(Count::Three);
        let d = Card::new(Count::Two, Symbol::Oval, Color::Red, Fill::Empty);

        assert!(TableEngine::is_set(&[a, b, c]).unwrap());
        assert!(!TableEngine::is_set(&[a, b, d]).unwrap());
    }

    #[test]
    fn test_search_is_snapshot() {
        let mut engine = TableEngine::new(11);
        let search = engine.find_all_sets();
        let expected = search.clone().count();

        let cards: Vec<Card> = engine.table().iter().take(3).copied().collect();
        engine.remove_from_table(&cards).unwrap();
        engine.fill_table();

        assert_eq!(search.table_len(), 12);
        assert_eq!(search.count(), expected);
    }

    #[test]
    fn test_candidate_count() {
        let engine = TableEngine::new(2);
        assert_eq!(engine.candidate_count(), 220);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut engine = TableEngine::new(21);
        let cards: Vec<Card> = engine.table().iter().take(3).copied().collect();
        engine.remove_from_table(&cards).unwrap();

        let restored = TableEngine::restore(&engine.snapshot()).unwrap();
        assert_eq!(restored.table(), engine.table());
        assert_eq!(restored.deck(), engine.deck());
        assert_eq!(restored.discarded(), engine.discarded());
    }

    #[test]
    fn test_restore_rejects_missing_cards() {
        let engine = TableEngine::new(4);
        let mut snapshot = engine.snapshot();
        snapshot.deck.pop();

        assert!(matches!(
            TableEngine::restore(&snapshot),
            Err(SetError::IncompleteDeck {
                expected: DECK_SIZE,
                found: 80
            })
        ));
    }

    #[test]
    fn test_restore_rejects_oversized_table() {
        let deck = Card::new_deck();
        let snapshot = EngineSnapshot {
            deck: deck[20..].to_vec(),
            table: deck[..20].to_vec(),
            discarded: Vec::new(),
        };

        assert!(matches!(
            TableEngine::restore(&snapshot),
            Err(SetError::TableOverflow { max: 12, found: 20 })
        ));
    }

    #[test]
    fn test_restore_accepts_short_table() {
        let deck = Card::new_deck();
        let snapshot = EngineSnapshot {
            deck: Vec::new(),
            table: deck[..6].to_vec(),
            discarded: deck[6..].to_vec(),
        };

        let restored = TableEngine::restore(&snapshot).unwrap();
        assert_eq!(restored.table().len(), 6);
        assert!(restored.is_deck_empty());
    }

    #[test]
    fn test_restore_rejects_overlap() {
        let engine = TableEngine::new(4);
        let mut snapshot = engine.snapshot();
        snapshot.discarded.push(snapshot.table[0]);

        assert!(matches!(
            TableEngine::restore(&snapshot),
            Err(SetError::DuplicateCard(_))
        ));
    }
}
