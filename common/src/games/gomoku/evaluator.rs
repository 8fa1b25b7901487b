use super::board::Board;
use super::line_scanner::{DIRECTIONS, WIN_LENGTH, run_length};
use super::types::{GameOutcome, Mark, Move, WinningLine};

pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(line) = find_winning_line(board)
        && let Some(outcome) = GameOutcome::win_for(line.mark)
    {
        return outcome;
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

/// First run of `WIN_LENGTH` or more found scanning cells in row-major order.
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    scan(board, |mark| mark != Mark::Empty)
}

pub fn has_five_in_row(board: &Board, mark: Mark) -> bool {
    mark != Mark::Empty && scan(board, |cell| cell == mark).is_some()
}

fn scan(board: &Board, wanted: impl Fn(Mark) -> bool) -> Option<WinningLine> {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let Ok(mark) = board.get(row, col) else {
                continue;
            };
            if !wanted(mark) {
                continue;
            }

            for (dr, dc) in DIRECTIONS {
                let length = run_length(board, row, col, dr, dc, mark);
                if length >= WIN_LENGTH {
                    let steps = (length - 1) as isize;
                    let end = Move::new(
                        (row as isize + dr * steps) as usize,
                        (col as isize + dc * steps) as usize,
                    );
                    return Some(WinningLine::new(mark, Move::new(row, col), end));
                }
            }
        }
    }

    None
}
