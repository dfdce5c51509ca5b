use std::io::{ErrorKind, Write};
use std::time::{Duration, Instant};

use common::games::tictactoe::{ScheduledTask, SessionPhase, TaskReport, TicTacToeSession};
use common::log;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio_stream::wrappers::LinesStream;
use tokio_stream::StreamExt;

use crate::command::{parse_command, Command, HELP};
use crate::render::render;

/// Drives one session from the terminal. Delayed work requested by the
/// session is slept on in a spawned task and handed back over `task_tx`.
pub struct GameRunner {
    session: TicTacToeSession,
    first_name: String,
    second_name: Option<String>,
    show_coordinates: bool,
    task_tx: mpsc::UnboundedSender<ScheduledTask>,
}

impl GameRunner {
    pub fn new(
        session: TicTacToeSession,
        first_name: String,
        second_name: Option<String>,
        show_coordinates: bool,
        task_tx: mpsc::UnboundedSender<ScheduledTask>,
    ) -> Self {
        Self {
            session,
            first_name,
            second_name,
            show_coordinates,
            task_tx,
        }
    }

    pub fn session(&self) -> &TicTacToeSession {
        &self.session
    }

    pub async fn run(
        mut self,
        mut task_rx: mpsc::UnboundedReceiver<ScheduledTask>,
        tick_interval: Duration,
    ) -> std::io::Result<()> {
        let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
        let mut ticker = tokio::time::interval(tick_interval);

        show(&self.screen(Instant::now()));

        loop {
            tokio::select! {
                line = lines.next() => {
                    let Some(line) = line else {
                        break;
                    };
                    let command = match read_command(line)? {
                        Ok(Command::Quit) => break,
                        Ok(command) => command,
                        Err(message) => {
                            show(&message);
                            continue;
                        }
                    };
                    if let Some(screen) = self.handle_command(command, Instant::now()) {
                        show(&screen);
                    }
                }
                Some(task) = task_rx.recv() => {
                    if let Some(screen) = self.handle_task(task, Instant::now()) {
                        show(&screen);
                    }
                }
                _ = ticker.tick() => {
                    if let Some(screen) = self.tick(Instant::now()) {
                        show(&screen);
                    }
                }
            }
        }

        log!("[session:{}] Closed", self.session().stamp());
        Ok(())
    }

    /// Returns the text to show, if any.
    pub fn handle_command(&mut self, command: Command, now: Instant) -> Option<String> {
        match command {
            Command::Start(mode) => {
                self.session
                    .start(mode, &self.first_name, self.second_name.as_deref(), now);
            }
            Command::Move { row, col } => match self.session.attempt_move(row, col, now) {
                Ok(report) => {
                    if let Some(task) = report.scheduled {
                        self.schedule(task);
                    }
                }
                Err(e) => return Some(e.to_string()),
            },
            Command::Again => {
                if self.session.phase() == SessionPhase::Setup {
                    return Some("Choose a mode first: 'pvp' or 'bot'".to_string());
                }
                self.session.reset(now);
            }
            Command::Menu => self.session.return_to_menu(),
            Command::Status => {}
            Command::Help => return Some(HELP.to_string()),
            Command::Quit => return None,
        }
        Some(self.screen(now))
    }

    pub fn handle_task(&mut self, task: ScheduledTask, now: Instant) -> Option<String> {
        match self.session.run_task(&task, now) {
            TaskReport::Stale | TaskReport::Skipped => None,
            TaskReport::BotMoved(report) => {
                if let Some(task) = report.scheduled {
                    self.schedule(task);
                }
                Some(self.screen(now))
            }
            TaskReport::Finished { .. } => Some(self.screen(now)),
        }
    }

    pub fn tick(&mut self, now: Instant) -> Option<String> {
        self.session.check_timeout(now).map(|_| self.screen(now))
    }

    fn schedule(&self, task: ScheduledTask) {
        let tx = self.task_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(task.delay).await;
            // The receiver is gone once the runner has shut down.
            let _ = tx.send(task);
        });
    }

    fn screen(&self, now: Instant) -> String {
        render(&self.session.snapshot(now), self.show_coordinates)
    }
}

/// Unreadable lines are reported like bad commands; other read errors end the loop.
fn read_command(line: std::io::Result<String>) -> std::io::Result<Result<Command, String>> {
    match line {
        Ok(text) => Ok(parse_command(&text).map_err(|e| e.to_string())),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            Ok(Err(format!("Could not read that line: {}", e)))
        }
        Err(e) => Err(e),
    }
}

fn show(text: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, "\n{}", text);
    let _ = stdout.flush();
}
