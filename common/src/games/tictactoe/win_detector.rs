use super::board::Board;
use super::types::{Mark, Outcome, Position, WinLine};

const fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Scan order matters: the first complete line is the one reported.
/// Rows top to bottom, columns left to right, then the main and anti diagonal.
const LINES: [[Position; 3]; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub outcome: Outcome,
    pub win_line: Option<WinLine>,
}

pub fn evaluate(board: &Board) -> Evaluation {
    if let Some(line) = check_win_with_line(board) {
        return Evaluation {
            outcome: Outcome::won_by(line.mark),
            win_line: Some(line),
        };
    }

    let outcome = if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::Undecided
    };

    Evaluation {
        outcome,
        win_line: None,
    }
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinLine> {
    let rows = board.rows();
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = rows[a.row][a.col];
        if mark != Mark::Empty && mark == rows[b.row][b.col] && mark == rows[c.row][c.col] {
            Some(WinLine::new(mark, a, c))
        } else {
            None
        }
    })
}
