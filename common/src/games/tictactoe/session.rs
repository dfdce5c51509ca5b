use std::time::{Duration, Instant};

use crate::{debug_log, log, SessionId, SessionStamp};
use crate::games::SessionRng;
use crate::id_generator::generate_bot_name;
use super::board::Board;
use super::bot_controller::{calculate_move, BotInput};
use super::error::MoveError;
use super::game_state::{PlacedMark, TicTacToeGameState};
use super::settings::SessionSettings;
use super::types::{GameMode, Mark, Outcome, PlayerNames, Position, SessionPhase, WinLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    BotMove,
    FinishGame,
}

/// Deferred work the front-end must hand back through `run_task` once `delay`
/// has passed. The stamp ties it to the run of the session that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    pub stamp: SessionStamp,
    pub kind: TaskKind,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveReport {
    pub placed: PlacedMark,
    pub phase: SessionPhase,
    pub scheduled: Option<ScheduledTask>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskReport {
    /// Issued by an earlier run (reset or menu in between).
    Stale,
    /// Still current, but the state it was waiting for has moved on.
    Skipped,
    BotMoved(MoveReport),
    Finished { outcome: Outcome, message: String },
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub board: Board,
    pub current_mark: Mark,
    pub outcome: Outcome,
    pub win_line: Option<WinLine>,
    pub phase: SessionPhase,
    pub active: bool,
    pub bot_thinking: bool,
    pub mode: GameMode,
    pub player_names: PlayerNames,
    pub remaining_x: Option<f64>,
    pub remaining_o: Option<f64>,
    pub message: Option<String>,
}

pub struct TicTacToeSession {
    stamp: SessionStamp,
    settings: SessionSettings,
    rng: SessionRng,
    mode: GameMode,
    player_names: PlayerNames,
    game: TicTacToeGameState,
    phase: SessionPhase,
    active: bool,
    bot_thinking: bool,
    end_message: Option<String>,
}

impl TicTacToeSession {
    pub fn new(session_id: SessionId, settings: SessionSettings, rng: SessionRng, now: Instant) -> Self {
        let player_names = PlayerNames::new(
            settings.default_first_name.clone(),
            settings.default_second_name.clone(),
        );
        Self {
            stamp: SessionStamp::new(session_id, 0),
            settings,
            rng,
            mode: GameMode::HumanVsHuman,
            player_names,
            game: TicTacToeGameState::new(now),
            phase: SessionPhase::Setup,
            active: false,
            bot_thinking: false,
            end_message: None,
        }
    }

    pub fn stamp(&self) -> &SessionStamp {
        &self.stamp
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn player_names(&self) -> &PlayerNames {
        &self.player_names
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_bot_thinking(&self) -> bool {
        self.bot_thinking
    }

    pub fn board(&self) -> &Board {
        self.game.board()
    }

    pub fn current_mark(&self) -> Mark {
        self.game.current_mark()
    }

    pub fn outcome(&self) -> Outcome {
        self.game.outcome()
    }

    pub fn win_line(&self) -> Option<WinLine> {
        self.game.win_line()
    }

    pub fn end_message(&self) -> Option<&str> {
        self.end_message.as_deref()
    }

    /// Starts a fresh game. Blank names fall back to the configured defaults;
    /// against the bot the second name is drawn from the bot name list.
    pub fn start(&mut self, mode: GameMode, first_name: &str, second_name: Option<&str>, now: Instant) {
        let x = non_blank(first_name)
            .unwrap_or(self.settings.default_first_name.as_str())
            .to_string();
        let o = match mode {
            GameMode::HumanVsHuman => second_name
                .and_then(non_blank)
                .unwrap_or(self.settings.default_second_name.as_str())
                .to_string(),
            GameMode::HumanVsBot => generate_bot_name(&mut self.rng, &self.settings.bot_names),
        };

        self.mode = mode;
        self.player_names = PlayerNames::new(x, o);
        self.begin(now);
    }

    /// Plays again with the same mode and names.
    pub fn reset(&mut self, now: Instant) {
        self.begin(now);
    }

    pub fn return_to_menu(&mut self) {
        self.bump_generation();
        self.phase = SessionPhase::Setup;
        self.active = false;
        self.bot_thinking = false;
        log!("[session:{}] Returned to menu", self.stamp);
    }

    /// A move by a human participant.
    pub fn attempt_move(&mut self, row: usize, col: usize, now: Instant) -> Result<MoveReport, MoveError> {
        if self.game.outcome().is_decided() {
            return Err(MoveError::GameOver);
        }
        if !self.active {
            return Err(MoveError::SessionInactive);
        }
        if self.mode.bot_mark() == Some(self.game.current_mark()) {
            return Err(MoveError::NotYourTurn);
        }

        self.apply_move(Position::new(row, col), now)
    }

    pub fn run_task(&mut self, task: &ScheduledTask, now: Instant) -> TaskReport {
        if task.stamp != self.stamp {
            debug_log!(
                "[session:{}] Ignoring {:?} issued for {}",
                self.stamp,
                task.kind,
                task.stamp
            );
            return TaskReport::Stale;
        }

        match task.kind {
            TaskKind::BotMove => self.resolve_bot_turn(now),
            TaskKind::FinishGame => {
                if self.phase != SessionPhase::WinPending {
                    return TaskReport::Skipped;
                }
                let message = self.finish();
                TaskReport::Finished {
                    outcome: self.game.outcome(),
                    message,
                }
            }
        }
    }

    /// Plays the bot's move if it is still the bot's turn in a live game.
    pub fn resolve_bot_turn(&mut self, now: Instant) -> TaskReport {
        self.bot_thinking = false;

        let Some(bot_mark) = self.mode.bot_mark() else {
            return TaskReport::Skipped;
        };
        if !self.active || self.game.outcome().is_decided() || self.game.current_mark() != bot_mark {
            return TaskReport::Skipped;
        }

        let input = BotInput::new(self.game.board().snapshot(), bot_mark);
        let Some(pos) = calculate_move(input, &mut self.rng) else {
            return TaskReport::Skipped;
        };

        match self.apply_move(pos, now) {
            Ok(report) => TaskReport::BotMoved(report),
            Err(e) => {
                log!("[session:{}] Bot failed to place mark at {}: {}", self.stamp, pos, e);
                TaskReport::Skipped
            }
        }
    }

    /// Ends the game if the current player has run out of time; the opponent wins.
    pub fn check_timeout(&mut self, now: Instant) -> Option<Outcome> {
        if !self.active || self.phase != SessionPhase::InProgress {
            return None;
        }
        if !self.game.has_timed_out(now, self.settings.turn_time_limit) {
            return None;
        }

        let loser = self.game.current_mark();
        let outcome = self.game.forfeit(loser).ok()?;
        let winner = outcome.winner()?;

        self.active = false;
        self.bot_thinking = false;
        self.phase = SessionPhase::Terminal;
        let message = format!(
            "{}'s time ran out! {} wins!",
            self.player_names.name_of(loser),
            self.player_names.name_of(winner)
        );
        log!("[session:{}] {}", self.stamp, message);
        self.end_message = Some(message);

        Some(outcome)
    }

    pub fn snapshot(&self, now: Instant) -> SessionSnapshot {
        let remaining = if self.active {
            Some(
                self.game
                    .turns()
                    .remaining_seconds(now, self.settings.turn_time_limit),
            )
        } else {
            None
        };
        let current = self.game.current_mark();

        SessionSnapshot {
            board: self.game.board().snapshot(),
            current_mark: current,
            outcome: self.game.outcome(),
            win_line: self.game.win_line(),
            phase: self.phase,
            active: self.active,
            bot_thinking: self.bot_thinking,
            mode: self.mode,
            player_names: self.player_names.clone(),
            remaining_x: remaining.filter(|_| current == Mark::X),
            remaining_o: remaining.filter(|_| current == Mark::O),
            message: self.end_message.clone(),
        }
    }

    fn begin(&mut self, now: Instant) {
        self.bump_generation();
        self.game = TicTacToeGameState::new(now);
        self.phase = SessionPhase::InProgress;
        self.active = true;
        self.bot_thinking = false;
        self.end_message = None;
        log!(
            "[session:{}] Started {:?}: {} (X) vs {} (O)",
            self.stamp,
            self.mode,
            self.player_names.x,
            self.player_names.o
        );
    }

    fn bump_generation(&mut self) {
        self.stamp.generation += 1;
    }

    fn apply_move(&mut self, pos: Position, now: Instant) -> Result<MoveReport, MoveError> {
        let placed = self.game.place_mark(pos, now)?;
        debug_log!(
            "[session:{}] {} placed at {}\n{}",
            self.stamp,
            placed.mark,
            pos,
            self.game.board().to_text()
        );

        let mut scheduled = None;
        let mut message = None;

        match placed.outcome {
            Outcome::Undecided => scheduled = self.schedule_bot_turn(),
            Outcome::Tie => message = Some(self.finish()),
            Outcome::XWins | Outcome::OWins => {
                self.active = false;
                if self.settings.win_highlight_delay.is_zero() {
                    message = Some(self.finish());
                } else {
                    self.phase = SessionPhase::WinPending;
                    scheduled = Some(self.task(TaskKind::FinishGame, self.settings.win_highlight_delay));
                }
            }
        }

        Ok(MoveReport {
            placed,
            phase: self.phase,
            scheduled,
            message,
        })
    }

    fn schedule_bot_turn(&mut self) -> Option<ScheduledTask> {
        if self.bot_thinking || self.mode.bot_mark() != Some(self.game.current_mark()) {
            return None;
        }
        self.bot_thinking = true;
        Some(self.task(TaskKind::BotMove, self.settings.bot_thinking_delay))
    }

    fn task(&self, kind: TaskKind, delay: Duration) -> ScheduledTask {
        ScheduledTask {
            stamp: self.stamp.clone(),
            kind,
            delay,
        }
    }

    fn finish(&mut self) -> String {
        self.active = false;
        self.phase = SessionPhase::Terminal;
        let message = match self.game.outcome().winner() {
            Some(winner) => format!("{} wins!", self.player_names.name_of(winner)),
            None => "It's a tie!".to_string(),
        };
        log!("[session:{}] {}", self.stamp, message);
        self.end_message = Some(message.clone());
        message
    }
}

fn non_blank(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
