use std::fmt;

use crate::games::SessionRng;
use super::board::Board;
use super::strategy::DecisionStrategy;
use super::types::{Mark, Move, TurnState};

/// Why a move was not applied. Board and turn state are unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    GameOver,
    NotYourTurn,
    CellUnavailable(Move),
    NoMoveAvailable,
    StrategyProposedIllegal(Move),
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::GameOver => write!(f, "Game is already over"),
            MoveRejection::NotYourTurn => write!(f, "Not your turn"),
            MoveRejection::CellUnavailable(mv) => {
                write!(f, "Cell {} is occupied or out of range", mv)
            }
            MoveRejection::NoMoveAvailable => write!(f, "No move available"),
            MoveRejection::StrategyProposedIllegal(mv) => {
                write!(f, "Strategy proposed illegal move {}", mv)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnController {
    state: TurnState,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    pub fn new() -> Self {
        Self {
            state: TurnState::FirstToMove,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn apply_first_move(&mut self, board: &mut Board, mv: Move) -> Result<(), MoveRejection> {
        if self.state != TurnState::FirstToMove {
            return Err(MoveRejection::NotYourTurn);
        }
        if !board.place(mv.row, mv.col, Mark::First) {
            return Err(MoveRejection::CellUnavailable(mv));
        }

        self.state = self.state.next();
        Ok(())
    }

    pub fn apply_second_move(
        &mut self,
        board: &mut Board,
        strategy: &dyn DecisionStrategy,
        rng: &mut SessionRng,
    ) -> Result<Move, MoveRejection> {
        if self.state != TurnState::SecondToMove {
            return Err(MoveRejection::NotYourTurn);
        }

        let mv = strategy
            .choose_move(board, rng)
            .ok_or(MoveRejection::NoMoveAvailable)?;

        if !board.place(mv.row, mv.col, Mark::Second) {
            return Err(MoveRejection::StrategyProposedIllegal(mv));
        }

        self.state = self.state.next();
        Ok(mv)
    }
}
