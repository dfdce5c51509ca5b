mod command;
mod config;
mod render;
mod runner;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use common::config::ConfigError;
use common::games::SessionRng;
use common::games::tictactoe::{GameMode, TicTacToeSession};
use common::id_generator::generate_session_id;
use common::logger::{self, LogTarget};
use common::{log, SessionId};
use tokio::sync::mpsc;

use config::get_config_manager;
use runner::GameRunner;

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Pvp,
    Bot,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvp => GameMode::HumanVsHuman,
            ModeArg::Bot => GameMode::HumanVsBot,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// YAML config file, defaults to the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
    /// Skip the menu and start right away
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    #[arg(long)]
    first_name: Option<String>,
    /// Ignored against the bot
    #[arg(long)]
    second_name: Option<String>,
    /// Replays the same bot names and bot fallback moves
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    log_prefix: bool,
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger_with(prefix, LogTarget::Stderr, args.verbose);

    let config = get_config_manager(args.config).load_or_default();

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let session_id = SessionId::new(generate_session_id(&mut rng));
    log!("Session {} created with seed {}", session_id, rng.seed());

    let settings = config.game.session_settings().map_err(ConfigError::Invalid)?;
    let now = Instant::now();
    let mut session = TicTacToeSession::new(session_id, settings, rng, now);
    let first_name = args.first_name.unwrap_or_default();
    if let Some(mode) = args.mode {
        session.start(mode.into(), &first_name, args.second_name.as_deref(), now);
    }

    let (task_tx, task_rx) = mpsc::unbounded_channel();
    let runner = GameRunner::new(
        session,
        first_name,
        args.second_name,
        config.display.show_coordinates,
        task_tx,
    );
    runner
        .run(task_rx, Duration::from_millis(config.display.tick_interval_ms))
        .await?;

    Ok(())
}
