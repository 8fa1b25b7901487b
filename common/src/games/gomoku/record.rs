use std::fmt;

use super::board::Board;
use super::types::{BoardError, Mark, Move};

pub const MOVE_SEPARATOR: &str = ";";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedMove {
    pub mark: Mark,
    pub mv: Move,
}

impl RecordedMove {
    pub fn new(mark: Mark, mv: Move) -> Self {
        Self { mark, mv }
    }
}

impl fmt::Display for RecordedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.mark.name(), self.mv)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    MalformedToken(String),
    UnknownSide(String),
    InvalidCoordinate(String),
    IllegalMove { index: usize, mv: RecordedMove },
    Board(BoardError),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::MalformedToken(token) => write!(f, "Malformed move token: '{}'", token),
            RecordError::UnknownSide(side) => write!(f, "Unknown side: '{}'", side),
            RecordError::InvalidCoordinate(token) => {
                write!(f, "Invalid one-based coordinate in '{}'", token)
            }
            RecordError::IllegalMove { index, mv } => {
                write!(f, "Move #{} ({}) cannot be applied", index + 1, mv)
            }
            RecordError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

impl std::error::Error for RecordError {}

impl From<BoardError> for RecordError {
    fn from(e: BoardError) -> Self {
        RecordError::Board(e)
    }
}

/// `First:r,c;Second:r,c;...` with one-based coordinates.
pub fn encode_move_list(moves: &[RecordedMove]) -> String {
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(MOVE_SEPARATOR)
}

pub fn parse_move_list(encoded: &str) -> Result<Vec<RecordedMove>, RecordError> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    encoded.split(MOVE_SEPARATOR).map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<RecordedMove, RecordError> {
    let token = token.trim();
    let (side, coords) = token
        .split_once(':')
        .ok_or_else(|| RecordError::MalformedToken(token.to_string()))?;

    let mark = match side {
        "First" => Mark::First,
        "Second" => Mark::Second,
        other => return Err(RecordError::UnknownSide(other.to_string())),
    };

    let (row, col) = coords
        .split_once(',')
        .ok_or_else(|| RecordError::MalformedToken(token.to_string()))?;
    let invalid = || RecordError::InvalidCoordinate(token.to_string());
    let row: usize = row.trim().parse().map_err(|_| invalid())?;
    let col: usize = col.trim().parse().map_err(|_| invalid())?;
    let mv = Move::from_one_based(row, col).ok_or_else(invalid)?;

    Ok(RecordedMove::new(mark, mv))
}

/// Re-applies `moves` in order to a fresh `rows` x `cols` board.
pub fn replay_moves(
    rows: usize,
    cols: usize,
    moves: &[RecordedMove],
) -> Result<Board, RecordError> {
    let mut board = Board::new(rows, cols)?;
    for (index, recorded) in moves.iter().enumerate() {
        if !board.place(recorded.mv.row, recorded.mv.col, recorded.mark) {
            return Err(RecordError::IllegalMove { index, mv: *recorded });
        }
    }
    Ok(board)
}
