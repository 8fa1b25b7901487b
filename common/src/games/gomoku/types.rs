use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    First,
    Second,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::First => Some(Mark::Second),
            Mark::Second => Some(Mark::First),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::First => 'X',
            Mark::Second => 'O',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mark::Empty => "Empty",
            Mark::First => "First",
            Mark::Second => "Second",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Zero-based board coordinate. Displayed one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Builds a move from one-based coordinates; `None` when either is zero.
    pub fn from_one_based(row: usize, col: usize) -> Option<Self> {
        Some(Self {
            row: row.checked_sub(1)?,
            col: col.checked_sub(1)?,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row + 1, self.col + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    FirstWins,
    SecondWins,
    Draw,
}

impl GameOutcome {
    pub fn win_for(mark: Mark) -> Option<GameOutcome> {
        match mark {
            Mark::First => Some(GameOutcome::FirstWins),
            Mark::Second => Some(GameOutcome::SecondWins),
            Mark::Empty => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self != GameOutcome::InProgress
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameOutcome::InProgress => "InProgress",
            GameOutcome::FirstWins => "FirstWins",
            GameOutcome::SecondWins => "SecondWins",
            GameOutcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "InProgress" => Ok(GameOutcome::InProgress),
            "FirstWins" => Ok(GameOutcome::FirstWins),
            "SecondWins" => Ok(GameOutcome::SecondWins),
            "Draw" => Ok(GameOutcome::Draw),
            other => Err(format!("Unknown game outcome: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    FirstToMove,
    SecondToMove,
}

impl TurnState {
    pub fn mark(&self) -> Mark {
        match self {
            TurnState::FirstToMove => Mark::First,
            TurnState::SecondToMove => Mark::Second,
        }
    }

    pub fn next(&self) -> TurnState {
        match self {
            TurnState::FirstToMove => TurnState::SecondToMove,
            TurnState::SecondToMove => TurnState::FirstToMove,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Move,
    pub end: Move,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Move, end: Move) -> Self {
        Self { mark, start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidDimensions { rows: usize, cols: usize },
    OutOfRange { row: usize, col: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { rows, cols } => {
                write!(
                    f,
                    "Invalid board dimensions {}x{}: rows and cols must be positive",
                    rows, cols
                )
            }
            BoardError::OutOfRange { row, col } => {
                write!(f, "Coordinates ({}, {}) are out of range", row, col)
            }
        }
    }
}

impl std::error::Error for BoardError {}
