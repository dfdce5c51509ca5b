use std::fmt;

use super::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    OutOfRange { row: usize, col: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfRange { row, col } => {
                write!(f, "Position ({}, {}) is outside the board", row, col)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Why a move was refused. A refused move never changes the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    SessionInactive,
    GameOver,
    NotYourTurn,
    OutOfRange { row: usize, col: usize },
    CellOccupied(Position),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::SessionInactive => write!(f, "Session is not accepting moves"),
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::NotYourTurn => write!(f, "Not your turn"),
            MoveError::OutOfRange { row, col } => {
                write!(f, "Position ({}, {}) is outside the board", row, col)
            }
            MoveError::CellOccupied(pos) => write!(f, "Cell {} is already marked", pos),
        }
    }
}

impl std::error::Error for MoveError {}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfRange { row, col } => MoveError::OutOfRange { row, col },
        }
    }
}
