use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::games::gomoku::{
    Board, GameOutcome, RecordError, RecordedMove, parse_move_list, replay_moves,
};
use crate::storage::{ContentProvider, Validate, YamlDocument};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub id: u64,
    pub created_at: String,
    pub rows: usize,
    pub cols: usize,
    /// `First:r,c;Second:r,c;...`, one-based.
    pub moves: String,
    pub result: String,
}

impl SavedGame {
    pub fn outcome(&self) -> Result<GameOutcome, String> {
        self.result.parse()
    }

    pub fn recorded_moves(&self) -> Result<Vec<RecordedMove>, RecordError> {
        parse_move_list(&self.moves)
    }

    pub fn restore_board(&self) -> Result<Board, RecordError> {
        replay_moves(self.rows, self.cols, &self.recorded_moves()?)
    }
}

impl fmt::Display for SavedGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} [{}] {}x{} result={} moves={}",
            self.id, self.created_at, self.rows, self.cols, self.result, self.moves
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGameArchive {
    pub next_id: u64,
    pub games: Vec<SavedGame>,
}

impl Default for SavedGameArchive {
    fn default() -> Self {
        Self {
            next_id: 1,
            games: Vec::new(),
        }
    }
}

impl Validate for SavedGameArchive {
    fn validate(&self) -> Result<(), String> {
        for game in &self.games {
            if game.id == 0 || game.id >= self.next_id {
                return Err(format!("Saved game id {} is outside 1..{}", game.id, self.next_id));
            }
            if game.rows == 0 || game.cols == 0 {
                return Err(format!(
                    "Saved game {} has invalid size {}x{}",
                    game.id, game.rows, game.cols
                ));
            }
            game.outcome()
                .map_err(|e| format!("Saved game {}: {}", game.id, e))?;
            game.recorded_moves()
                .map_err(|e| format!("Saved game {}: {}", game.id, e))?;
        }
        Ok(())
    }
}

pub struct SavedGameStore<P: ContentProvider> {
    document: YamlDocument<P, SavedGameArchive>,
}

impl<P: ContentProvider> SavedGameStore<P> {
    pub fn new(provider: P) -> Self {
        Self {
            document: YamlDocument::new(provider),
        }
    }

    /// Appends a game and returns its id. Ids start at 1 and only grow.
    pub fn save(
        &self,
        rows: usize,
        cols: usize,
        moves: &str,
        result: GameOutcome,
    ) -> Result<u64, String> {
        let mut archive = self.document.get()?;
        let id = archive.next_id;

        archive.games.push(SavedGame {
            id,
            created_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            rows,
            cols,
            moves: moves.to_string(),
            result: result.name().to_string(),
        });
        archive.next_id += 1;

        self.document.set(&archive)?;
        Ok(id)
    }

    /// Newest first.
    pub fn list_all(&self) -> Result<Vec<SavedGame>, String> {
        let mut games = self.document.get()?.games;
        games.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::{Mark, evaluate};
    use crate::storage::{FileContentProvider, MemoryContentProvider};

    fn get_temp_file_path() -> String {
        let random_number: u32 = rand::random();
        std::env::temp_dir()
            .join(format!("temp_gomoku_saved_games_{}.yaml", random_number))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let store = SavedGameStore::new(MemoryContentProvider::new());
        assert_eq!(store.list_all(), Ok(vec![]));
    }

    #[test]
    fn test_ids_increase_and_list_is_newest_first() {
        let store = SavedGameStore::new(MemoryContentProvider::new());
        let first = store.save(15, 15, "First:1,1", GameOutcome::InProgress).unwrap();
        let second = store.save(15, 15, "", GameOutcome::InProgress).unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);

        let ids: Vec<u64> = store.list_all().unwrap().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_saved_game_restores_board() {
        let store = SavedGameStore::new(MemoryContentProvider::new());
        let moves = "First:1,1;Second:2,2;First:1,2;Second:2,3;First:1,3;Second:2,4;First:1,4;Second:2,5;First:1,5";
        store.save(5, 5, moves, GameOutcome::FirstWins).unwrap();

        let game = store.list_all().unwrap().remove(0);
        let board = game.restore_board().unwrap();
        assert_eq!(board.get(1, 1), Ok(Mark::Second));
        assert_eq!(game.outcome(), Ok(GameOutcome::FirstWins));
        assert_eq!(evaluate(&board), GameOutcome::FirstWins);
    }

    #[test]
    fn test_file_store_persists_between_instances() {
        let path = get_temp_file_path();
        let store = SavedGameStore::new(FileContentProvider::new(path.clone()));
        store.save(9, 9, "First:5,5", GameOutcome::InProgress).unwrap();

        let reopened = SavedGameStore::new(FileContentProvider::new(path));
        let games = reopened.list_all().unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].moves, "First:5,5");
        assert_eq!(reopened.save(9, 9, "", GameOutcome::InProgress), Ok(2));
    }

    #[test]
    fn test_archive_with_bad_result_is_rejected() {
        let content = "next_id: 2\ngames:\n- id: 1\n  created_at: now\n  rows: 5\n  cols: 5\n  moves: ''\n  result: BLACK_WIN\n";
        let store = SavedGameStore::new(MemoryContentProvider::with_content(content));
        assert!(store.list_all().is_err());
    }
}
