mod board;
mod evaluator;
mod line_scanner;
mod record;
mod session;
mod strategy;
mod turn_controller;
mod types;

pub use board::Board;
pub use evaluator::{evaluate, find_winning_line, has_five_in_row};
pub use line_scanner::{DIRECTIONS, WIN_LENGTH, run_length, run_length_both_ways};
pub use record::{RecordError, RecordedMove, encode_move_list, parse_move_list, replay_moves};
pub use session::{GomokuSession, MoveReport};
pub use strategy::{DecisionStrategy, HeuristicStrategy, RandomStrategy, StrategyKind};
pub use turn_controller::{MoveRejection, TurnController};
pub use types::{BoardError, GameOutcome, Mark, Move, TurnState, WinningLine};
