use std::time::Duration;

pub const DEFAULT_TURN_TIME_LIMIT: Duration = Duration::from_secs(10);
pub const DEFAULT_BOT_THINKING_DELAY: Duration = Duration::from_millis(800);
pub const DEFAULT_WIN_HIGHLIGHT_DELAY: Duration = Duration::from_millis(1200);

pub const DEFAULT_BOT_NAMES: &[&str] = &[
    "ThinkBot", "SmartBot", "LogicBot", "WinBot", "TacBot",
    "StrategyBot", "CleverBot", "MindBot", "GeniusBot", "ProBot",
];

/// Pacing and naming for a session. The delays only shape presentation;
/// the rules are the same for any value, including zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub turn_time_limit: Duration,
    pub bot_thinking_delay: Duration,
    pub win_highlight_delay: Duration,
    pub default_first_name: String,
    pub default_second_name: String,
    pub bot_names: Vec<String>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            turn_time_limit: DEFAULT_TURN_TIME_LIMIT,
            bot_thinking_delay: DEFAULT_BOT_THINKING_DELAY,
            win_highlight_delay: DEFAULT_WIN_HIGHLIGHT_DELAY,
            default_first_name: "Player 1".to_string(),
            default_second_name: "Player 2".to_string(),
            bot_names: DEFAULT_BOT_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }
}
