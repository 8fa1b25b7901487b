mod saved_games;
mod stats;

pub use saved_games::{SavedGame, SavedGameArchive, SavedGameStore};
pub use stats::{GameStats, StatsStore};
