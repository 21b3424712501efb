mod config_service;

pub use config_service::{ConfigService, LogLevel, MAX_WINDOW_DAYS, MIN_WINDOW_DAYS};
