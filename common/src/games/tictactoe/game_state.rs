use std::time::{Duration, Instant};

use super::board::Board;
use super::error::MoveError;
use super::turn_controller::TurnController;
use super::types::{Mark, Outcome, Position, WinLine};
use super::win_detector::evaluate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedMark {
    pub position: Position,
    pub mark: Mark,
    pub outcome: Outcome,
    pub win_line: Option<WinLine>,
}

/// Board, turn order and result of one game. Knows the rules but nothing about
/// players, bots or pacing.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    turns: TurnController,
    outcome: Outcome,
    win_line: Option<WinLine>,
}

impl TicTacToeGameState {
    pub fn new(now: Instant) -> Self {
        Self {
            board: Board::new(),
            turns: TurnController::new(now),
            outcome: Outcome::Undecided,
            win_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.turns.current()
    }

    pub fn turns(&self) -> &TurnController {
        &self.turns
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn win_line(&self) -> Option<WinLine> {
        self.win_line
    }

    pub fn place_mark(&mut self, pos: Position, now: Instant) -> Result<PlacedMark, MoveError> {
        if self.outcome.is_decided() {
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(pos.row, pos.col)? {
            return Err(MoveError::CellOccupied(pos));
        }

        let mark = self.turns.current();
        self.board.place(pos, mark);

        let evaluation = evaluate(&self.board);
        self.outcome = evaluation.outcome;
        self.win_line = evaluation.win_line;

        if !self.outcome.is_decided() {
            self.turns.advance(now);
        }

        Ok(PlacedMark {
            position: pos,
            mark,
            outcome: self.outcome,
            win_line: self.win_line,
        })
    }

    pub fn has_timed_out(&self, now: Instant, limit: Duration) -> bool {
        !self.outcome.is_decided() && self.turns.has_timed_out(now, limit)
    }

    /// Ends the game in favour of `loser`'s opponent. Returns the new outcome.
    pub fn forfeit(&mut self, loser: Mark) -> Result<Outcome, MoveError> {
        if self.outcome.is_decided() {
            return Err(MoveError::GameOver);
        }
        let winner = loser.opponent().ok_or(MoveError::NotYourTurn)?;
        self.outcome = Outcome::won_by(winner);
        self.win_line = None;
        Ok(self.outcome)
    }
}
