use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::Board;
use super::evaluator::has_five_in_row;
use super::types::{Mark, Move};

/// Picks a move for the bot side. Implementations only read `board`;
/// any simulation happens on private copies.
pub trait DecisionStrategy {
    fn choose_move(&self, board: &Board, rng: &mut SessionRng) -> Option<Move>;

    fn kind(&self) -> StrategyKind;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Random,
    #[default]
    Heuristic,
}

impl StrategyKind {
    pub fn build(&self) -> Box<dyn DecisionStrategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy),
            StrategyKind::Heuristic => Box::new(HeuristicStrategy::new(Mark::Second)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl DecisionStrategy for RandomStrategy {
    fn choose_move(&self, board: &Board, rng: &mut SessionRng) -> Option<Move> {
        let available_moves = board.available_moves();
        rng.choose(&available_moves).copied()
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }
}

/// One-ply greedy: complete an own five, else block the opponent's five,
/// else play randomly. Ties go to the first candidate in row-major order.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicStrategy {
    bot_mark: Mark,
    fallback: RandomStrategy,
}

impl HeuristicStrategy {
    pub fn new(bot_mark: Mark) -> Self {
        Self {
            bot_mark,
            fallback: RandomStrategy,
        }
    }
}

impl DecisionStrategy for HeuristicStrategy {
    fn choose_move(&self, board: &Board, rng: &mut SessionRng) -> Option<Move> {
        let available_moves = board.available_moves();
        if available_moves.is_empty() {
            return None;
        }

        if let Some(mv) = find_completing_move(board, self.bot_mark, &available_moves) {
            return Some(mv);
        }

        if let Some(opponent_mark) = self.bot_mark.opponent()
            && let Some(mv) = find_completing_move(board, opponent_mark, &available_moves)
        {
            return Some(mv);
        }

        self.fallback.choose_move(board, rng)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Heuristic
    }
}

fn find_completing_move(board: &Board, mark: Mark, candidates: &[Move]) -> Option<Move> {
    candidates.iter().copied().find(|mv| {
        let mut simulated = board.copy();
        simulated.place(mv.row, mv.col, mark) && has_five_in_row(&simulated, mark)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heuristic() -> HeuristicStrategy {
        HeuristicStrategy::new(Mark::Second)
    }

    #[test]
    fn test_random_returns_available_move() {
        let board = Board::from_rows(&["XO.", "OX.", "XOX"]);
        let mut rng = SessionRng::new(3);
        for _ in 0..20 {
            let mv = RandomStrategy.choose_move(&board, &mut rng).unwrap();
            assert!(board.available_moves().contains(&mv));
        }
    }

    #[test]
    fn test_random_on_full_board_returns_none() {
        let board = Board::from_rows(&["XO", "OX"]);
        let mut rng = SessionRng::new(3);
        assert_eq!(RandomStrategy.choose_move(&board, &mut rng), None);
        assert_eq!(heuristic().choose_move(&board, &mut rng), None);
    }

    #[test]
    fn test_random_is_deterministic_for_seed() {
        let board = Board::new(15, 15).unwrap();
        let a = RandomStrategy.choose_move(&board, &mut SessionRng::new(99));
        let b = RandomStrategy.choose_move(&board, &mut SessionRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_heuristic_completes_own_four() {
        let board = Board::from_rows(&[
            "X......",
            ".OOOO..",
            "X......",
            "X......",
        ]);
        let mut rng = SessionRng::new(1);
        // (1,0) comes before (1,5) in row-major order
        assert_eq!(heuristic().choose_move(&board, &mut rng), Some(Move::new(1, 0)));
    }

    #[test]
    fn test_heuristic_completes_four_open_at_one_end() {
        let board = Board::from_rows(&[
            "XOOOO..",
            ".......",
            "X...X..",
        ]);
        let mut rng = SessionRng::new(1);
        assert_eq!(heuristic().choose_move(&board, &mut rng), Some(Move::new(0, 5)));
    }

    #[test]
    fn test_heuristic_blocks_opponent_four() {
        let board = Board::from_rows(&[
            ".......",
            "OXXXX..",
            "O......",
            ".......",
        ]);
        let mut rng = SessionRng::new(1);
        assert_eq!(heuristic().choose_move(&board, &mut rng), Some(Move::new(1, 5)));
    }

    #[test]
    fn test_heuristic_prefers_win_over_block() {
        let board = Board::from_rows(&[
            "XXXX...",
            ".......",
            "OOOO...",
        ]);
        let mut rng = SessionRng::new(1);
        assert_eq!(heuristic().choose_move(&board, &mut rng), Some(Move::new(2, 4)));
    }

    #[test]
    fn test_heuristic_does_not_mutate_board() {
        let board = Board::from_rows(&["XXXX...", "OOO...."]);
        let snapshot = board.clone();
        let mut rng = SessionRng::new(5);
        heuristic().choose_move(&board, &mut rng);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_heuristic_falls_back_to_random() {
        let board = Board::from_rows(&["X......", ".O.....", "......."]);
        let a = heuristic().choose_move(&board, &mut SessionRng::new(11));
        let b = RandomStrategy.choose_move(&board, &mut SessionRng::new(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_kind_builds_matching_strategy() {
        assert_eq!(StrategyKind::Random.build().kind(), StrategyKind::Random);
        assert_eq!(StrategyKind::Heuristic.build().kind(), StrategyKind::Heuristic);
        assert_eq!(StrategyKind::default(), StrategyKind::Heuristic);
    }
}
