use std::fmt;

use super::types::{BoardError, Mark, Move};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Mark>>,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![vec![Mark::Empty; cols]; rows],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Signed so that direction steps off the top or left edge stay representable.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Mark, BoardError> {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .ok_or(BoardError::OutOfRange { row, col })
    }

    /// The only way cell contents change. Rejects out-of-range and occupied
    /// cells, and refuses to place `Mark::Empty`.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if mark == Mark::Empty {
            return false;
        }

        match self.cells.get_mut(row).and_then(|cells| cells.get_mut(col)) {
            Some(cell) if *cell == Mark::Empty => {
                *cell = mark;
                true
            }
            _ => false,
        }
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|cells| cells.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn copy(&self) -> Board {
        self.clone()
    }

    /// Text grid with one-based row and column headers.
    pub fn render(&self) -> String {
        let mut out = String::from("   ");
        for col in 0..self.cols {
            out.push_str(&format!("{:2} ", col + 1));
        }
        out.push('\n');

        for (row, cells) in self.cells.iter().enumerate() {
            out.push_str(&format!("{:2} ", row + 1));
            for cell in cells {
                out.push(' ');
                out.push(cell.symbol());
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len(), rows[0].len()).unwrap();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let mark = match ch {
                    'X' => Mark::First,
                    'O' => Mark::Second,
                    _ => continue,
                };
                assert!(board.place(row, col, mark));
            }
        }
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
