use crate::application::services::{ConfigService, LogLevel};
use crate::presentation::error::CommandError;

/// Get current log level
pub fn get_log_level(config: &ConfigService) -> Result<String, CommandError> {
    Ok(config.get_log_level().as_str().to_string())
}

/// Set log level
pub fn set_log_level(config: &ConfigService, level: &str) -> Result<String, CommandError> {
    let log_level: LogLevel = level
        .parse()
        .map_err(|e: anyhow::Error| CommandError::validation(e.to_string()))?;

    config
        .set_log_level(log_level)
        .map_err(|e| CommandError::infrastructure(format!("Failed to save log level: {}", e)))?;
    Ok(log_level.as_str().to_string())
}

pub fn get_streak_window(config: &ConfigService) -> Result<u32, CommandError> {
    Ok(config.get_streak_window_days())
}

/// Set the streak window; the stored (clamped) value is returned
pub fn set_streak_window(config: &ConfigService, days: u32) -> Result<u32, CommandError> {
    config
        .set_streak_window_days(days)
        .map_err(|e| CommandError::infrastructure(format!("Failed to save window: {}", e)))
}
