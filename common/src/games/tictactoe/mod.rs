mod board;
mod bot_controller;
mod error;
mod game_state;
mod session;
mod settings;
mod turn_controller;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{calculate_move, BotInput};
pub use error::{BoardError, MoveError};
pub use game_state::{PlacedMark, TicTacToeGameState};
pub use session::{
    MoveReport, ScheduledTask, SessionSnapshot, TaskKind, TaskReport, TicTacToeSession,
};
pub use settings::{
    SessionSettings, DEFAULT_BOT_NAMES, DEFAULT_BOT_THINKING_DELAY, DEFAULT_TURN_TIME_LIMIT,
    DEFAULT_WIN_HIGHLIGHT_DELAY,
};
pub use turn_controller::TurnController;
pub use types::{
    GameMode, Mark, Outcome, PlayerNames, Position, SessionPhase, WinLine, BOARD_SIZE,
};
pub use win_detector::{check_win, check_win_with_line, evaluate, Evaluation};
