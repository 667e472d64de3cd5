//! Per-game records and aggregate autoplay statistics.

use serde::{Deserialize, Serialize};

use crate::game::Score;

/// Outcome of one autoplayed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Seed the game was dealt from.
    pub seed: u64,

    /// Rounds played.
    pub rounds: u32,

    /// Final (or last known) score.
    pub score: Score,

    /// Rounds where the table held no Set.
    pub no_set_rounds: u32,

    /// Cards on the table when the game ended.
    pub table_left: usize,

    /// Did the game reach its natural end?
    pub finished: bool,
}

impl GameRecord {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rounds: 0,
            score: Score::default(),
            no_set_rounds: 0,
            table_left: 0,
            finished: false,
        }
    }
}

/// Statistics collected over many autoplayed games.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AutoplayStats {
    /// Games recorded.
    pub games: u32,

    /// Games that reached their natural end.
    pub finished: u32,

    /// Total rounds over all games.
    pub rounds: u64,

    /// Games the simulated player won outright.
    pub player_wins: u32,

    /// Games the computer won outright.
    pub computer_wins: u32,

    /// Rounds without any Set on the table.
    pub no_set_rounds: u64,
}

impl AutoplayStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold one game into the totals.
    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        self.finished += u32::from(game.finished);
        self.rounds += u64::from(game.rounds);
        self.no_set_rounds += u64::from(game.no_set_rounds);
        if game.score.player > game.score.computer {
            self.player_wins += 1;
        } else if game.score.computer > game.score.player {
            self.computer_wins += 1;
        }
    }

    /// Games that ended level.
    #[must_use]
    pub fn draws(&self) -> u32 {
        self.games - self.player_wins - self.computer_wins
    }

    /// Average rounds per game.
    #[must_use]
    pub fn avg_rounds(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.rounds as f64 / f64::from(self.games)
        }
    }

    /// Fraction of games the simulated player won.
    #[must_use]
    pub fn player_win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.player_wins) / f64::from(self.games)
        }
    }

    /// Fraction of rounds that had no Set on the table.
    #[must_use]
    pub fn no_set_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.no_set_rounds as f64 / self.rounds as f64
        }
    }
}

impl std::fmt::Display for AutoplayStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games | {:.1} rounds/game | player {} / computer {} / draw {} | no-set rounds {:.1}%",
            self.games,
            self.avg_rounds(),
            self.player_wins,
            self.computer_wins,
            self.draws(),
            self.no_set_rate() * 100.0
        )
    }
}
