use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::evaluator::{evaluate, find_winning_line};
use super::record::{RecordedMove, encode_move_list};
use super::strategy::DecisionStrategy;
use super::turn_controller::{MoveRejection, TurnController};
use super::types::{BoardError, GameOutcome, Mark, Move, TurnState, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub mark: Mark,
    pub mv: Move,
    pub outcome: GameOutcome,
}

/// One human-vs-bot game. Owns its board; nothing is shared between sessions.
pub struct GomokuSession {
    board: Board,
    controller: TurnController,
    strategy: Box<dyn DecisionStrategy>,
    rng: SessionRng,
    history: Vec<RecordedMove>,
    outcome: GameOutcome,
}

impl GomokuSession {
    pub fn new_game(
        rows: usize,
        cols: usize,
        strategy: Box<dyn DecisionStrategy>,
        rng: SessionRng,
    ) -> Result<Self, BoardError> {
        let board = Board::new(rows, cols)?;
        log!(
            "New {}x{} game, bot {:?}, seed {}",
            rows,
            cols,
            strategy.kind(),
            rng.seed()
        );

        Ok(Self {
            board,
            controller: TurnController::new(),
            strategy,
            rng,
            history: Vec::new(),
            outcome: GameOutcome::InProgress,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> TurnState {
        self.controller.state()
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn history(&self) -> &[RecordedMove] {
        &self.history
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn move_list(&self) -> String {
        encode_move_list(&self.history)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        find_winning_line(&self.board)
    }

    pub fn render(&self) -> String {
        self.board.render()
    }

    pub fn apply_first_move(&mut self, mv: Move) -> Result<MoveReport, MoveRejection> {
        self.ensure_in_progress()?;

        if let Err(rejection) = self.controller.apply_first_move(&mut self.board, mv) {
            log!("Rejected first move {}: {}", mv, rejection);
            return Err(rejection);
        }

        Ok(self.record(Mark::First, mv))
    }

    pub fn apply_second_move(&mut self) -> Result<MoveReport, MoveRejection> {
        self.ensure_in_progress()?;

        let result = self.controller.apply_second_move(
            &mut self.board,
            self.strategy.as_ref(),
            &mut self.rng,
        );

        match result {
            Ok(mv) => {
                log!("{:?} bot chose {}", self.strategy.kind(), mv);
                Ok(self.record(Mark::Second, mv))
            }
            Err(rejection) => {
                log!("Second move failed: {}", rejection);
                Err(rejection)
            }
        }
    }

    fn ensure_in_progress(&self) -> Result<(), MoveRejection> {
        if self.outcome.is_terminal() {
            return Err(MoveRejection::GameOver);
        }
        Ok(())
    }

    fn record(&mut self, mark: Mark, mv: Move) -> MoveReport {
        self.history.push(RecordedMove::new(mark, mv));
        self.outcome = evaluate(&self.board);
        log!("{} moved at {}", mark, mv);

        if self.outcome.is_terminal() {
            log!("Game ended: {} after {} moves", self.outcome, self.history.len());
        }

        MoveReport {
            mark,
            mv,
            outcome: self.outcome,
        }
    }
}
