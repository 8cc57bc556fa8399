use crate::constants::{DEFAULT_REPLY_PREFIX, DEFAULT_TICK_RATE_MS, LOG_LEVEL_ENV, MAX_TICK_RATE_MS};
use crate::errors::{BubbleChatError, BubbleChatResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf, sync::RwLock};

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reply_prefix: String,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_prefix: DEFAULT_REPLY_PREFIX.to_string(),
            log_level: "info".to_string(),
            log_dir: None,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl Config {
    /// Reads the config at `path`, writing the defaults there first if the
    /// file does not exist yet.
    pub fn load_from(path: &Path) -> BubbleChatResult<Config> {
        if path.exists() {
            let config_str = fs::read_to_string(path).map_err(|e| {
                BubbleChatError::config_error(format!("Failed to read config file: {}", e))
            })?;

            let config: Config = serde_json::from_str(&config_str).map_err(|e| {
                BubbleChatError::config_error(format!("Failed to parse config: {}", e))
            })?;

            validate_config(&config)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> BubbleChatResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                BubbleChatError::config_error(format!(
                    "Failed to create config directory: {}",
                    e
                ))
            })?;
        }

        let config_str = serde_json::to_string_pretty(self)?;
        fs::write(path, config_str).map_err(|e| {
            BubbleChatError::config_error(format!("Failed to write config file: {}", e))
        })
    }

    /// Applies `BUBBLECHAT_LOG_LEVEL` on top of the file value.
    pub fn apply_env(&mut self) -> BubbleChatResult<()> {
        if let Ok(level) = env::var(LOG_LEVEL_ENV) {
            self.log_level = level.trim().to_lowercase();
        }
        validate_config(self)
    }

    pub fn resolved_log_dir(&self) -> PathBuf {
        match &self.log_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_local_dir()
                .map(|dir| dir.join("bubblechat").join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs")),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> BubbleChatResult<Config> {
    initialize_config_from(&get_config_path()?)
}

/// Loads the config at `path`, applies the environment override and makes
/// the result the one [`get_config`] returns.
pub fn initialize_config_from(path: &Path) -> BubbleChatResult<Config> {
    let mut config = Config::load_from(path)?;
    config.apply_env()?;

    let mut guard = CONFIG
        .write()
        .map_err(|_| BubbleChatError::config_error("Config lock poisoned"))?;
    *guard = config.clone();

    Ok(config)
}

pub fn get_config_path() -> BubbleChatResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| BubbleChatError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("bubblechat").join("config.json"))
}

pub fn validate_config(config: &Config) -> BubbleChatResult<()> {
    if !LOG_LEVELS.contains(&config.log_level.as_str()) {
        return Err(BubbleChatError::config_error(format!(
            "Unknown log level '{}', expected one of {}",
            config.log_level,
            LOG_LEVELS.join("|")
        )));
    }

    if config.tick_rate_ms == 0 || config.tick_rate_ms > MAX_TICK_RATE_MS {
        return Err(BubbleChatError::config_error(format!(
            "tick_rate_ms must be between 1 and {}",
            MAX_TICK_RATE_MS
        )));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG
        .read()
        .map(|config| config.clone())
        .unwrap_or_default()
}
