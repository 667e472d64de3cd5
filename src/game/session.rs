//! Game session: scores and round state around a [`TableEngine`].
//!
//! A round goes through these phases:
//!
//! ```text
//! Searching --select() x3, valid-------> Found(Player)
//! Searching --timeout(), set on table--> Found(Computer)
//! Searching --timeout(), none----------> NoSets { game_over: deck empty }
//! Found / NoSets --advance()-----------> Searching (next round or new game)
//! ```
//!
//! The session never reads a clock. The control loop decides when the
//! search time from [`SessionConfig`] has run out and calls `timeout()`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::config::SessionConfig;
use crate::core::error::{Result, SetError};
use crate::core::rng::{GameRng, GameRngState};
use crate::table::{EngineSnapshot, TableEngine, Triplet};

/// Who resolved a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Finder {
    Player,
    Computer,
}

/// A Set that resolved the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundSet {
    pub triplet: Triplet,
    pub finder: Finder,
}

/// Where the current round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player to pick three cards or for a timeout.
    Searching,
    /// A Set was found; `advance()` removes it.
    Found(FoundSet),
    /// The table holds no Set. With an empty deck this ends the game.
    NoSets { game_over: bool },
}

/// Result of toggling a card in the player's selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Fewer than three cards are selected; holds the current count.
    Pending(usize),
    /// Three cards forming a Set; the player scores.
    Found(Triplet),
    /// Three cards that do not form a Set; the selection was cleared.
    Rejected(Triplet),
}

/// Result of the search time running out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeoutOutcome {
    /// The computer took the first Set on the table and scores.
    ComputerFound(Triplet),
    /// No Set on the table.
    NoSets { game_over: bool },
}

/// Result of moving past a resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Cards were replaced; a new round is searching.
    NextRound,
    /// The game ended with this final score. A fresh game has been dealt.
    GameOver(Score),
}

/// Points per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} (you - computer)", self.player, self.computer)
    }
}

/// One player against the computer.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    rng: GameRng,
    engine: TableEngine,
    score: Score,
    selection: SmallVec<[Card; 3]>,
    phase: Phase,
    round: u32,
    games_completed: u32,
}

impl GameSession {
    /// Start a session whose deals are determined by `seed`.
    #[must_use]
    pub fn new(config: SessionConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Start a session with OS-seeded shuffles.
    #[must_use]
    pub fn from_entropy(config: SessionConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    fn with_rng(config: SessionConfig, mut rng: GameRng) -> Self {
        let engine = TableEngine::shuffled(&mut rng);
        log::info!("new game (search time {}s)", config.search_secs());
        Self {
            config,
            rng,
            engine,
            score: Score::default(),
            selection: SmallVec::new(),
            phase: Phase::Searching,
            round: 1,
            games_completed: 0,
        }
    }

    /// Play on a prepared engine (for scripted scenarios).
    ///
    /// `seed` drives the deals of any later games.
    #[must_use]
    pub fn with_engine(config: SessionConfig, engine: TableEngine, seed: u64) -> Self {
        Self {
            config,
            rng: GameRng::new(seed),
            engine,
            score: Score::default(),
            selection: SmallVec::new(),
            phase: Phase::Searching,
            round: 1,
            games_completed: 0,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &TableEngine {
        &self.engine
    }

    /// Cards currently on the table.
    #[must_use]
    pub fn table(&self) -> &im::Vector<Card> {
        self.engine.table()
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Cards the player has selected so far.
    #[must_use]
    pub fn selection(&self) -> &[Card] {
        &self.selection
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Round number within the current game (starts at 1).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Games finished in this session.
    #[must_use]
    pub fn games_completed(&self) -> u32 {
        self.games_completed
    }

    /// Is the round still waiting for a set?
    #[must_use]
    pub fn is_searching(&self) -> bool {
        matches!(self.phase, Phase::Searching)
    }

    /// Will the next `advance()` end the game?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::NoSets { game_over: true })
    }

    // === Events ===

    /// Toggle `card` in the player's selection.
    ///
    /// Selecting a third card checks the selection: a Set resolves the round
    /// in the player's favour, anything else clears the selection.
    pub fn select(&mut self, card: Card) -> Result<Selection> {
        if !self.is_searching() {
            return Err(SetError::RoundResolved);
        }
        if !self.engine.on_table(&card) {
            return Err(SetError::CardNotOnTable(card));
        }

        if let Some(pos) = self.selection.iter().position(|c| *c == card) {
            self.selection.remove(pos);
            return Ok(Selection::Pending(self.selection.len()));
        }

        self.selection.push(card);
        if self.selection.len() < 3 {
            return Ok(Selection::Pending(self.selection.len()));
        }

        let triplet = Triplet::new(self.selection[0], self.selection[1], self.selection[2]);
        self.selection.clear();

        if triplet.is_set() {
            self.score.player += 1;
            self.phase = Phase::Found(FoundSet {
                triplet,
                finder: Finder::Player,
            });
            log::debug!("round {}: player found {}", self.round, triplet);
            Ok(Selection::Found(triplet))
        } else {
            log::debug!("round {}: rejected {}", self.round, triplet);
            Ok(Selection::Rejected(triplet))
        }
    }

    /// The search time ran out: the computer looks for a set.
    pub fn timeout(&mut self) -> Result<TimeoutOutcome> {
        if !self.is_searching() {
            return Err(SetError::RoundResolved);
        }
        self.selection.clear();

        match self.engine.first_set() {
            Some(triplet) => {
                self.score.computer += 1;
                self.phase = Phase::Found(FoundSet {
                    triplet,
                    finder: Finder::Computer,
                });
                log::debug!("round {}: computer found {}", self.round, triplet);
                Ok(TimeoutOutcome::ComputerFound(triplet))
            }
            None => {
                let game_over = self.engine.is_deck_empty();
                self.phase = Phase::NoSets { game_over };
                log::debug!(
                    "round {}: no sets on {} cards (game over: {})",
                    self.round,
                    self.engine.table().len(),
                    game_over
                );
                Ok(TimeoutOutcome::NoSets { game_over })
            }
        }
    }

    /// Clear a resolved round and refill the table.
    ///
    /// A found Set is removed. Without a Set the first three table cards are
    /// discarded instead, unless the deck is empty, which ends the game and
    /// deals a new one.
    pub fn advance(&mut self) -> Result<Advance> {
        let game_over = match self.phase {
            Phase::Searching => return Err(SetError::RoundInProgress),
            Phase::Found(found) => {
                self.engine.remove_from_table(found.triplet.cards())?;
                false
            }
            Phase::NoSets { game_over } => {
                let stale: SmallVec<[Card; 3]> =
                    self.engine.table().iter().take(3).copied().collect();
                self.engine.remove_from_table(&stale)?;
                game_over
            }
        };

        self.selection.clear();
        self.phase = Phase::Searching;
        self.engine.fill_table();

        if game_over {
            let final_score = self.score;
            log::info!("game over after {} rounds: {}", self.round, final_score);
            self.games_completed += 1;
            self.new_game();
            return Ok(Advance::GameOver(final_score));
        }

        self.round += 1;
        Ok(Advance::NextRound)
    }

    /// Abandon the current game and deal a fresh one.
    pub fn new_game(&mut self) {
        self.engine = TableEngine::shuffled(&mut self.rng);
        self.score = Score::default();
        self.selection.clear();
        self.phase = Phase::Searching;
        self.round = 1;
        log::info!("new game (game {})", self.games_completed + 1);
    }

    // === Snapshots ===

    /// Capture the full session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.config,
            rng: self.rng.state(),
            engine: self.engine.snapshot(),
            score: self.score,
            selection: self.selection.to_vec(),
            phase: self.phase,
            round: self.round,
            games_completed: self.games_completed,
        }
    }

    /// Resume a session from a snapshot.
    ///
    /// The round state must be one the session could have reached: a
    /// selection of at most two table cards while searching, a found Set
    /// that is still on the table, and game over only with an empty deck.
    pub fn restore(snapshot: &SessionSnapshot) -> Result<Self> {
        let engine = TableEngine::restore(&snapshot.engine)?;
        check_round(&engine, &snapshot.selection, &snapshot.phase)?;

        Ok(Self {
            config: snapshot.config,
            rng: GameRng::from_state(&snapshot.rng),
            engine,
            score: snapshot.score,
            selection: SmallVec::from_slice(&snapshot.selection),
            phase: snapshot.phase,
            round: snapshot.round,
            games_completed: snapshot.games_completed,
        })
    }
}

/// Reject round state the session could never have reached.
fn check_round(engine: &TableEngine, selection: &[Card], phase: &Phase) -> Result<()> {
    if let Some(card) = selection.iter().find(|c| !engine.on_table(c)) {
        return Err(SetError::CardNotOnTable(*card));
    }
    match selection {
        [] => {}
        [a, b] if a == b => return Err(SetError::DuplicateCard(*a)),
        [_] | [_, _] if matches!(phase, Phase::Searching) => {}
        [_] | [_, _] => {
            return Err(SetError::InconsistentSession(
                "selection outside a searching round",
            ))
        }
        _ => {
            return Err(SetError::InconsistentSession(
                "selection holds three or more cards",
            ))
        }
    }

    match phase {
        Phase::Searching | Phase::NoSets { game_over: false } => Ok(()),
        Phase::NoSets { game_over: true } if engine.is_deck_empty() => Ok(()),
        Phase::NoSets { game_over: true } => Err(SetError::InconsistentSession(
            "game over with cards left in the deck",
        )),
        Phase::Found(found) => {
            let [a, b, c] = found.triplet.cards();
            if let Some(card) = found.triplet.into_iter().find(|card| !engine.on_table(card)) {
                return Err(SetError::CardNotOnTable(card));
            }
            if a == b || a == c || b == c {
                return Err(SetError::InconsistentSession("found triplet repeats a card"));
            }
            if !found.triplet.is_set() {
                return Err(SetError::InconsistentSession("found triplet is not a Set"));
            }
            Ok(())
        }
    }
}

/// Serializable session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: SessionConfig,
    pub rng: GameRngState,
    pub engine: EngineSnapshot,
    pub score: Score,
    pub selection: Vec<Card>,
    pub phase: Phase,
    pub round: u32,
    pub games_completed: u32,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
