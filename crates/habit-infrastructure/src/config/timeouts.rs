use std::time::Duration;

/// Timeout durations used by the data-access layer
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Per-date check-in lookup while loading a streak window
    pub probe: Duration,

    /// Acquiring a database connection
    pub db_query: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        GLOBAL_TIMEOUT_CONFIG.clone()
    }
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the probe timeout
    pub fn with_probe(mut self, probe: Duration) -> Self {
        self.probe = probe;
        self
    }

    /// Get the global timeout configuration
    pub fn global() -> &'static Self {
        &GLOBAL_TIMEOUT_CONFIG
    }
}

static GLOBAL_TIMEOUT_CONFIG: TimeoutConfig = TimeoutConfig {
    probe: Duration::from_secs(2),
    db_query: Duration::from_secs(10),
};
