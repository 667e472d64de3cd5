//! Autoplay loop: whole games with a simulated player.
//!
//! Each round the simulated player spots a Set before the timeout with
//! probability `skill`, picking uniformly among the Sets on the table.
//! Otherwise the round times out and the computer moves.

use crate::core::config::SessionConfig;
use crate::core::error::Result;
use crate::core::rng::{unit_probability, GameRng};
use crate::game::{Advance, GameSession, Selection, TimeoutOutcome};
use crate::table::Triplet;

use super::stats::{AutoplayStats, GameRecord};

/// Configuration for autoplay.
#[derive(Clone, Debug)]
pub struct AutoplayConfig {
    /// Number of games to play.
    pub games: usize,

    /// Chance per round that the simulated player finds a set in time.
    pub skill: f64,

    /// Maximum rounds per game (a full game never needs more than 28).
    pub max_rounds: u32,

    /// Seed offset (combined with game index for unique seeds).
    pub seed_offset: u64,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            games: 100,
            skill: 0.5,
            max_rounds: 100,
            seed_offset: 0,
        }
    }
}

impl AutoplayConfig {
    /// Create a new autoplay config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the simulated player's skill in `[0, 1]`. NaN means no skill.
    pub fn with_skill(mut self, skill: f64) -> Self {
        self.skill = unit_probability(skill);
        self
    }

    /// Set the round limit per game.
    pub fn with_max_rounds(mut self, max: u32) -> Self {
        self.max_rounds = max;
        self
    }

    /// Set seed offset.
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }
}

/// Plays games through [`GameSession`].
pub struct AutoplayRunner {
    config: AutoplayConfig,
}

impl AutoplayRunner {
    pub fn new(config: AutoplayConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AutoplayConfig {
        &self.config
    }

    /// Play one game dealt from `seed`.
    pub fn play_game(&self, seed: u64) -> Result<GameRecord> {
        let mut session = GameSession::new(SessionConfig::default(), seed);
        let mut player_rng = GameRng::new(seed ^ 0x9E37_79B9_7F4A_7C15);
        let mut record = GameRecord::new(seed);

        while record.rounds < self.config.max_rounds {
            record.rounds += 1;

            let sets: Vec<Triplet> = session.engine().find_all_sets().collect();
            let spotted = if player_rng.gen_bool(self.config.skill) {
                player_rng.choose(&sets).copied()
            } else {
                None
            };

            match spotted {
                Some(triplet) => {
                    let mut outcome = Selection::Pending(0);
                    for card in triplet {
                        outcome = session.select(card)?;
                    }
                    debug_assert!(matches!(outcome, Selection::Found(_)));
                }
                None => match session.timeout()? {
                    TimeoutOutcome::ComputerFound(_) => {}
                    TimeoutOutcome::NoSets { .. } => record.no_set_rounds += 1,
                },
            }

            let score = session.score();
            let table_left = session.table().len();
            if let Advance::GameOver(final_score) = session.advance()? {
                record.score = final_score;
                record.table_left = table_left;
                record.finished = true;
                return Ok(record);
            }
            record.score = score;
        }

        log::warn!("game {} hit the round limit of {}", seed, self.config.max_rounds);
        record.table_left = session.table().len();
        Ok(record)
    }

    /// Play `config.games` games with consecutive seeds.
    pub fn run(&self) -> Result<(Vec<GameRecord>, AutoplayStats)> {
        let mut records = Vec::with_capacity(self.config.games);
        let mut stats = AutoplayStats::new();

        for i in 0..self.config.games {
            let seed = self.config.seed_offset.wrapping_add(i as u64);
            let record = self.play_game(seed)?;
            log::debug!(
                "game {:>4}: {} rounds, {}",
                i,
                record.rounds,
                record.score
            );
            stats.record(&record);
            records.push(record);
        }

        log::info!("{}", stats);
        Ok((records, stats))
    }
}
