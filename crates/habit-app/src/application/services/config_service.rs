use anyhow::Result;
use habit_domain::streak::DEFAULT_WINDOW_DAYS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, AtomicU8, Ordering};
use std::sync::Arc;
use tracing::info;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const MIN_WINDOW_DAYS: u32 = 7;
pub const MAX_WINDOW_DAYS: u32 = 365;

/// Log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            5 => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(anyhow::anyhow!(
                "Invalid log level. Must be one of: error, warn, info, debug, trace"
            )),
        }
    }
}

/// Persistent configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct AppConfig {
    log_level: LogLevel,
    streak_window_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            streak_window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

fn clamp_window_days(days: u32) -> u32 {
    days.clamp(MIN_WINDOW_DAYS, MAX_WINDOW_DAYS)
}

/// Application configuration service
pub struct ConfigService {
    log_level: Arc<AtomicU8>,
    streak_window_days: Arc<AtomicU32>,
    config_path: PathBuf,
}

impl ConfigService {
    /// Load `config.json` from `config_dir`, falling back to defaults when
    /// the file is missing or unreadable.
    pub fn new(config_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(config_dir)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str::<AppConfig>(&content).unwrap_or_default()
        } else {
            AppConfig::default()
        };

        Ok(Self {
            log_level: Arc::new(AtomicU8::new(config.log_level as u8)),
            streak_window_days: Arc::new(AtomicU32::new(clamp_window_days(
                config.streak_window_days,
            ))),
            config_path,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get current log level
    pub fn get_log_level(&self) -> LogLevel {
        LogLevel::from_u8(self.log_level.load(Ordering::Relaxed))
    }

    /// Set log level and persist to disk
    pub fn set_log_level(&self, level: LogLevel) -> Result<()> {
        info!("Changing log level to: {}", level.as_str());
        self.log_level.store(level as u8, Ordering::Relaxed);
        self.persist()?;
        info!("Log level will take effect on next run");
        Ok(())
    }

    pub fn get_streak_window_days(&self) -> u32 {
        self.streak_window_days.load(Ordering::Relaxed)
    }

    /// Store the window length, clamped to `MIN_WINDOW_DAYS..=MAX_WINDOW_DAYS`.
    pub fn set_streak_window_days(&self, days: u32) -> Result<u32> {
        let days = clamp_window_days(days);
        self.streak_window_days.store(days, Ordering::Relaxed);
        self.persist()?;
        Ok(days)
    }

    fn persist(&self) -> Result<()> {
        let config = AppConfig {
            log_level: self.get_log_level(),
            streak_window_days: self.get_streak_window_days(),
        };

        let content = serde_json::to_string_pretty(&config)?;
        std::fs::write(&self.config_path, content)?;

        info!("Config saved to: {:?}", self.config_path);
        Ok(())
    }
}
