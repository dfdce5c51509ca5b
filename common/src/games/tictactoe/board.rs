use super::error::BoardError;
use super::types::{Mark, Position, BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from rows of marks. Used by fixtures and the bot's probes.
    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn get(&self, pos: Position) -> Result<Mark, BoardError> {
        self.cells
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .ok_or(BoardError::OutOfRange {
                row: pos.row,
                col: pos.col,
            })
    }

    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        self.get(Position::new(row, col)).map(|mark| mark == Mark::Empty)
    }

    /// Callers must only place a real mark on an empty, on-board cell.
    pub fn place(&mut self, pos: Position, mark: Mark) {
        debug_assert!(mark != Mark::Empty, "cannot place an empty mark");
        debug_assert!(
            self.is_empty(pos.row, pos.col) == Ok(true),
            "cell {} is not free",
            pos
        );
        if mark == Mark::Empty || !pos.is_on_board() {
            return;
        }
        let cell = &mut self.cells[pos.row][pos.col];
        if *cell == Mark::Empty {
            *cell = mark;
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn snapshot(&self) -> Board {
        *self
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Free cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell == mark).count()
    }

    pub fn to_text(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(Mark::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Copy of the board with `mark` at `pos`, for hypothetical evaluation.
    pub(crate) fn with_mark(&self, pos: Position, mark: Mark) -> Board {
        let mut probe = *self;
        probe.cells[pos.row][pos.col] = mark;
        probe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark::{Empty as E, O, X};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();

        assert_eq!(board.available_moves().len(), 9);
        assert!(!board.is_full());
        assert_eq!(board.is_empty(2, 2), Ok(true));
    }

    #[test]
    fn test_is_empty_out_of_range() {
        let board = Board::new();

        assert_eq!(board.is_empty(3, 0), Err(BoardError::OutOfRange { row: 3, col: 0 }));
        assert_eq!(board.is_empty(0, 7), Err(BoardError::OutOfRange { row: 0, col: 7 }));
    }

    #[test]
    fn test_place_sets_cell() {
        let mut board = Board::new();

        board.place(Position::new(1, 2), X);

        assert_eq!(board.get(Position::new(1, 2)), Ok(X));
        assert_eq!(board.is_empty(1, 2), Ok(false));
        assert_eq!(board.mark_count(X), 1);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = Board::new();
        let snapshot = board.snapshot();

        board.place(Position::new(0, 0), O);

        assert_eq!(snapshot.get(Position::new(0, 0)), Ok(E));
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);

        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_available_moves_row_major() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]);

        assert_eq!(
            board.available_moves(),
            vec![
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 0),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_to_text() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]);

        assert_eq!(board.to_text(), "X..\n.O.\n..X");
    }
}
