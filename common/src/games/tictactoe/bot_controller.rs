use crate::games::SessionRng;
use super::board::Board;
use super::types::{Mark, Position};
use super::win_detector::check_win;

const CENTER: Position = Position::new(1, 1);
const CORNERS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(0, 2),
    Position::new(2, 0),
    Position::new(2, 2),
];

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }
}

/// Greedy one-ply choice: win, block, center, corner, then any free cell at random.
/// It does not look ahead, so a fork beats it.
pub fn calculate_move(input: BotInput, rng: &mut SessionRng) -> Option<Position> {
    let bot_mark = input.bot_mark;
    let opponent_mark = bot_mark.opponent()?;
    let available_moves = input.board.available_moves();

    if available_moves.is_empty() {
        return None;
    }

    if let Some(pos) = find_winning_move(&input.board, bot_mark, &available_moves) {
        return Some(pos);
    }

    if let Some(pos) = find_winning_move(&input.board, opponent_mark, &available_moves) {
        return Some(pos);
    }

    if available_moves.contains(&CENTER) {
        return Some(CENTER);
    }

    if let Some(&corner) = CORNERS.iter().find(|corner| available_moves.contains(corner)) {
        return Some(corner);
    }

    rng.choose(&available_moves).copied()
}

fn find_winning_move(board: &Board, mark: Mark, moves: &[Position]) -> Option<Position> {
    moves
        .iter()
        .copied()
        .find(|&pos| check_win(&board.with_mark(pos, mark)) == Some(mark))
}
