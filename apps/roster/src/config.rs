// Runtime settings for the roster binary
// Read from the environment, optionally seeded by a .env file

use thiserror::Error;
use tracing::Level;

const LOG_LEVEL_KEY: &str = "ROSTER_LOG_LEVEL";
const TOP_PLAYERS_KEY: &str = "ROSTER_TOP_PLAYERS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Maximum level emitted by the log subscriber
    pub log_level: Level,
    /// How many players the top-players report lists
    pub top_players: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            top_players: 3,
        }
    }
}

impl RosterConfig {
    /// Loads `.env` if present, then reads the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; missing keys keep
    /// their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(LOG_LEVEL_KEY) {
            config.log_level = value.trim().parse().map_err(|_| ConfigError::Invalid {
                key: LOG_LEVEL_KEY,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(TOP_PLAYERS_KEY) {
            config.top_players = value.trim().parse().map_err(|_| ConfigError::Invalid {
                key: TOP_PLAYERS_KEY,
                value: value.clone(),
            })?;
        }

        Ok(config)
    }
}
