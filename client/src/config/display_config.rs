use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    /// How often the clock is checked for an expired turn.
    pub tick_interval_ms: u64,
    pub show_coordinates: bool,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if !(10..=1000).contains(&self.tick_interval_ms) {
            return Err(format!(
                "tick_interval_ms must be between 10 and 1000, got {}",
                self.tick_interval_ms
            ));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            show_coordinates: true,
        }
    }
}
