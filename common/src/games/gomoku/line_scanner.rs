use super::board::Board;
use super::types::Mark;

pub const WIN_LENGTH: usize = 5;

/// (row step, col step): horizontal, vertical, diagonal down-right, diagonal down-left.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Counts cells equal to `mark` starting at `(row, col)` and stepping by
/// `(dr, dc)`. One-directional: never looks behind the start cell.
pub fn run_length(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    mark: Mark,
) -> usize {
    let mut count = 0;
    let mut r = row as isize;
    let mut c = col as isize;

    while board.in_bounds(r, c) && board.get(r as usize, c as usize) == Ok(mark) {
        count += 1;
        r += dr;
        c += dc;
    }

    count
}

/// Length of the `mark` run through `(row, col)` along `(dr, dc)`, walking
/// both forward and backward. The start cell counts once and is assumed to
/// hold `mark`; callers ask about a stone they just placed.
pub fn run_length_both_ways(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    mark: Mark,
) -> usize {
    let forward = run_length_from(board, row as isize + dr, col as isize + dc, dr, dc, mark);
    let backward = run_length_from(board, row as isize - dr, col as isize - dc, -dr, -dc, mark);
    1 + forward + backward
}

fn run_length_from(
    board: &Board,
    row: isize,
    col: isize,
    dr: isize,
    dc: isize,
    mark: Mark,
) -> usize {
    if !board.in_bounds(row, col) {
        return 0;
    }
    run_length(board, row as usize, col as usize, dr, dc, mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_forward_only() {
        let board = Board::from_rows(&["XXX..", ".....", "....."]);
        assert_eq!(run_length(&board, 0, 0, 0, 1, Mark::First), 3);
        assert_eq!(run_length(&board, 0, 1, 0, 1, Mark::First), 2);
        assert_eq!(run_length(&board, 0, 2, 0, -1, Mark::First), 3);
    }

    #[test]
    fn test_start_cell_must_match() {
        let board = Board::from_rows(&[".XXX.", "....."]);
        assert_eq!(run_length(&board, 0, 0, 0, 1, Mark::First), 0);
        assert_eq!(run_length(&board, 0, 1, 0, 1, Mark::Second), 0);
    }

    #[test]
    fn test_stops_at_other_mark() {
        let board = Board::from_rows(&["XXOXX"]);
        assert_eq!(run_length(&board, 0, 0, 0, 1, Mark::First), 2);
    }

    #[test]
    fn test_stops_at_edge() {
        let board = Board::from_rows(&["X....", ".X...", "..X.."]);
        assert_eq!(run_length(&board, 0, 0, 1, 1, Mark::First), 3);
        assert_eq!(run_length(&board, 2, 2, 1, 1, Mark::First), 1);
    }

    #[test]
    fn test_anti_diagonal() {
        let board = Board::from_rows(&["....O", "...O.", "..O..", ".O...", "O...."]);
        assert_eq!(run_length(&board, 0, 4, 1, -1, Mark::Second), 5);
    }

    #[test]
    fn test_counts_empty_runs() {
        let board = Board::from_rows(&["X...."]);
        assert_eq!(run_length(&board, 0, 1, 0, 1, Mark::Empty), 4);
    }

    #[test]
    fn test_both_ways_from_middle_of_run() {
        let board = Board::from_rows(&[".XXXXX.", "......."]);
        assert_eq!(run_length_both_ways(&board, 0, 3, 0, 1, Mark::First), 5);
        assert_eq!(run_length(&board, 0, 3, 0, 1, Mark::First), 3);
        assert_eq!(run_length_both_ways(&board, 0, 3, 0, -1, Mark::First), 5);
    }

    #[test]
    fn test_both_ways_from_edge_of_run() {
        let board = Board::from_rows(&["XXXO.", "....."]);
        assert_eq!(run_length_both_ways(&board, 0, 0, 0, 1, Mark::First), 3);
        assert_eq!(run_length_both_ways(&board, 0, 2, 0, 1, Mark::First), 3);
        assert_eq!(run_length_both_ways(&board, 0, 3, 0, 1, Mark::Second), 1);
    }

    #[test]
    fn test_both_ways_diagonals() {
        let board = Board::from_rows(&["O....", ".O..X", "..OX.", "..XO.", ".X..."]);
        assert_eq!(run_length_both_ways(&board, 2, 2, 1, 1, Mark::Second), 4);
        assert_eq!(run_length_both_ways(&board, 3, 2, 1, -1, Mark::First), 4);
        assert_eq!(run_length_both_ways(&board, 2, 2, 0, 1, Mark::Second), 1);
    }
}
