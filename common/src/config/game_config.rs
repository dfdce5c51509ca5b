use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::games::tictactoe::{
    SessionSettings, DEFAULT_BOT_NAMES, DEFAULT_BOT_THINKING_DELAY, DEFAULT_TURN_TIME_LIMIT,
    DEFAULT_WIN_HIGHLIGHT_DELAY,
};
use super::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub turn_time_limit_secs: f64,
    pub bot_thinking_delay_ms: u64,
    /// 0 ends a won game immediately instead of holding the winning line on screen.
    pub win_highlight_delay_ms: u64,
    pub default_first_name: String,
    pub default_second_name: String,
    pub bot_names: Vec<String>,
}

impl GameConfig {
    /// Validates first, since out-of-range durations cannot be converted.
    pub fn session_settings(&self) -> Result<SessionSettings, String> {
        self.validate()?;
        Ok(SessionSettings {
            turn_time_limit: Duration::from_secs_f64(self.turn_time_limit_secs),
            bot_thinking_delay: Duration::from_millis(self.bot_thinking_delay_ms),
            win_highlight_delay: Duration::from_millis(self.win_highlight_delay_ms),
            default_first_name: self.default_first_name.clone(),
            default_second_name: self.default_second_name.clone(),
            bot_names: self.bot_names.clone(),
        })
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.turn_time_limit_secs.is_finite() || self.turn_time_limit_secs <= 0.0 {
            return Err(format!(
                "turn_time_limit_secs must be a positive number, got {}",
                self.turn_time_limit_secs
            ));
        }
        if self.turn_time_limit_secs > 3600.0 {
            return Err("turn_time_limit_secs must not exceed one hour".to_string());
        }
        if self.bot_thinking_delay_ms as f64 >= self.turn_time_limit_secs * 1000.0 {
            return Err(format!(
                "bot_thinking_delay_ms ({}) must be shorter than the turn limit ({}s)",
                self.bot_thinking_delay_ms, self.turn_time_limit_secs
            ));
        }
        if self.default_first_name.trim().is_empty() || self.default_second_name.trim().is_empty() {
            return Err("Default player names must not be blank".to_string());
        }
        if self.bot_names.is_empty() {
            return Err("bot_names must contain at least one name".to_string());
        }
        if let Some(index) = self.bot_names.iter().position(|name| name.trim().is_empty()) {
            return Err(format!("bot_names[{}] is blank", index));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_time_limit_secs: DEFAULT_TURN_TIME_LIMIT.as_secs_f64(),
            bot_thinking_delay_ms: DEFAULT_BOT_THINKING_DELAY.as_millis() as u64,
            win_highlight_delay_ms: DEFAULT_WIN_HIGHLIGHT_DELAY.as_millis() as u64,
            default_first_name: "Player 1".to_string(),
            default_second_name: "Player 2".to_string(),
            bot_names: DEFAULT_BOT_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigContentProvider, ConfigError, ConfigManager, ConfigSerializer,
        FileContentConfigProvider, MemoryContentConfigProvider, YamlConfigSerializer,
    };

    fn get_temp_file_path() -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = GameConfig::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: GameConfig = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_file() {
        let config = GameConfig {
            turn_time_limit_secs: 5.0,
            win_highlight_delay_ms: 0,
            ..GameConfig::default()
        };
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, GameConfig> = ConfigManager::from_yaml_file(&file_path);

        manager.set_config(&config).unwrap();
        let reloaded: ConfigManager<_, GameConfig> = ConfigManager::from_yaml_file(&file_path);
        let loaded = reloaded.get_config().unwrap();

        assert_eq!(config, loaded);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let provider = FileContentConfigProvider::new(get_temp_file_path());
        assert_eq!(provider.get_config_content().unwrap(), None);

        let manager: ConfigManager<_, GameConfig> =
            ConfigManager::new(provider, YamlConfigSerializer::new());

        assert_eq!(manager.get_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_partial_yaml_fills_in_defaults() {
        let provider =
            MemoryContentConfigProvider::new(Some("turn_time_limit_secs: 7.5\n".to_string()));
        let manager: ConfigManager<_, GameConfig> =
            ConfigManager::new(provider, YamlConfigSerializer::new());

        let config = manager.get_config().unwrap();

        assert_eq!(config.turn_time_limit_secs, 7.5);
        assert_eq!(config.bot_thinking_delay_ms, 800);
        assert_eq!(config.bot_names.len(), 10);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let provider = MemoryContentConfigProvider::new(Some(
            "turn_time_limit_secs: 0\nbot_names: []\n".to_string(),
        ));
        let manager: ConfigManager<_, GameConfig> =
            ConfigManager::new(provider, YamlConfigSerializer::new());

        let result = manager.get_config();

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        assert_eq!(manager.load_or_default(), GameConfig::default());
    }

    #[test]
    fn test_bot_delay_longer_than_turn_limit_is_rejected() {
        let provider = MemoryContentConfigProvider::new(Some(
            "turn_time_limit_secs: 2\nbot_thinking_delay_ms: 2000\n".to_string(),
        ));
        let manager: ConfigManager<_, GameConfig> =
            ConfigManager::new(provider, YamlConfigSerializer::new());

        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));

        let config = GameConfig {
            turn_time_limit_secs: 2.0,
            bot_thinking_delay_ms: 1999,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_set_config_refuses_invalid_values() {
        let manager: ConfigManager<_, GameConfig> =
            ConfigManager::new(MemoryContentConfigProvider::default(), YamlConfigSerializer::new());
        let config = GameConfig {
            bot_names: vec!["  ".to_string()],
            ..GameConfig::default()
        };

        assert!(matches!(manager.set_config(&config), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_session_settings_conversion() {
        let settings = GameConfig::default().session_settings().unwrap();

        assert_eq!(settings.turn_time_limit, Duration::from_secs(10));
        assert_eq!(settings.bot_thinking_delay, Duration::from_millis(800));
        assert_eq!(settings.win_highlight_delay, Duration::from_millis(1200));
    }

    #[test]
    fn test_session_settings_refuses_unvalidated_limit() {
        for limit in [-1.0, f64::NAN, f64::INFINITY, 1e30] {
            let config = GameConfig {
                turn_time_limit_secs: limit,
                ..GameConfig::default()
            };

            assert!(config.session_settings().is_err(), "limit {}", limit);
        }
    }
}
