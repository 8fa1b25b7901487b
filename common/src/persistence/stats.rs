use std::fmt;

use serde::{Deserialize, Serialize};

use crate::games::gomoku::GameOutcome;
use crate::storage::{ContentProvider, Validate, YamlDocument};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub games_played: u32,
    pub first_wins: u32,
    pub second_wins: u32,
    pub draws: u32,
}

impl GameStats {
    /// Counts a finished game. `InProgress` leaves the counters untouched, and
    /// so does a record whose `games_played` is already at `u32::MAX`.
    pub fn record(self, outcome: GameOutcome) -> GameStats {
        let Some(games_played) = self.games_played.checked_add(1) else {
            return self;
        };
        let mut next = GameStats {
            games_played,
            ..self
        };
        match outcome {
            GameOutcome::InProgress => return self,
            GameOutcome::FirstWins => next.first_wins = next.first_wins.saturating_add(1),
            GameOutcome::SecondWins => next.second_wins = next.second_wins.saturating_add(1),
            GameOutcome::Draw => next.draws = next.draws.saturating_add(1),
        }
        next
    }

    fn dominates(&self, other: &GameStats) -> bool {
        self.games_played >= other.games_played
            && self.first_wins >= other.first_wins
            && self.second_wins >= other.second_wins
            && self.draws >= other.draws
    }
}

impl Validate for GameStats {
    fn validate(&self) -> Result<(), String> {
        let finished =
            u64::from(self.first_wins) + u64::from(self.second_wins) + u64::from(self.draws);
        if finished > u64::from(self.games_played) {
            return Err(format!(
                "Wins and draws ({}) exceed games played ({})",
                finished, self.games_played
            ));
        }
        Ok(())
    }
}

impl fmt::Display for GameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Games: {}, First wins: {}, Second wins: {}, Draws: {}",
            self.games_played, self.first_wins, self.second_wins, self.draws
        )
    }
}

pub struct StatsStore<P: ContentProvider> {
    document: YamlDocument<P, GameStats>,
}

impl<P: ContentProvider> StatsStore<P> {
    pub fn new(provider: P) -> Self {
        Self {
            document: YamlDocument::new(provider),
        }
    }

    pub fn load(&self) -> Result<GameStats, String> {
        self.document.get()
    }

    /// Persists `stats`; refuses to lower any stored counter.
    pub fn save(&self, stats: &GameStats) -> Result<(), String> {
        let stored = self.document.get()?;
        if !stats.dominates(&stored) {
            return Err(format!("Refusing to decrease stored stats ({}) to ({})", stored, stats));
        }
        self.document.set(stats)
    }
}
