use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

pub const MAX_SLEEP_HOURS: f64 = 24.0;
pub const MAX_WATER_GLASSES: f64 = 10.0;
pub const MAX_SCREEN_TIME_HOURS: f64 = 12.0;

/// Aggregate stats recorded for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DayStats {
    pub sleep: f64,       // hours, half-hour steps
    pub water: f64,       // glasses
    pub screen_time: f64, // hours, half-hour steps
}

impl DayStats {
    /// Validated constructor; ranges match the check-in form sliders.
    pub fn new(sleep: f64, water: f64, screen_time: f64) -> Result<Self, DomainError> {
        validate_half_steps("Sleep", sleep, MAX_SLEEP_HOURS)?;
        validate_range("Water", water, MAX_WATER_GLASSES)?;
        if water.fract() != 0.0 {
            return Err(DomainError::Validation(
                "Water must be a whole number of glasses".to_string(),
            ));
        }
        validate_half_steps("Screen time", screen_time, MAX_SCREEN_TIME_HOURS)?;

        Ok(Self {
            sleep,
            water,
            screen_time,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// True when any metric was recorded.
    pub fn has_any(&self) -> bool {
        self.sleep > 0.0 || self.water > 0.0 || self.screen_time > 0.0
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Sleep => self.sleep,
            Metric::Water => self.water,
            Metric::ScreenTime => self.screen_time,
        }
    }
}

fn validate_range(label: &str, value: f64, max: f64) -> Result<(), DomainError> {
    if !value.is_finite() || value < 0.0 || value > max {
        return Err(DomainError::Validation(format!(
            "{} must be between 0 and {}",
            label, max
        )));
    }
    Ok(())
}

fn validate_half_steps(label: &str, value: f64, max: f64) -> Result<(), DomainError> {
    validate_range(label, value, max)?;
    if (value * 2.0).fract() != 0.0 {
        return Err(DomainError::Validation(format!(
            "{} must be a multiple of 0.5",
            label
        )));
    }
    Ok(())
}

/// One submitted check-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInEntry {
    pub date: NaiveDate,
    pub sleep: f64,
    pub water: f64,
    pub screen_time: f64,
}

impl CheckInEntry {
    pub fn new(date: NaiveDate, stats: DayStats) -> Self {
        Self {
            date,
            sleep: stats.sleep,
            water: stats.water,
            screen_time: stats.screen_time,
        }
    }

    pub fn stats(&self) -> DayStats {
        DayStats {
            sleep: self.sleep,
            water: self.water,
            screen_time: self.screen_time,
        }
    }
}

/// Stored state for one user and one date: the latest stats plus the
/// history of entries submitted for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayData {
    pub stats: DayStats,
    pub check_in_history: Vec<CheckInEntry>,
}

impl DayData {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A date counts as checked in when the history holds an entry for that
    /// exact date, or when any stat was recorded.
    pub fn has_valid_check_in(&self, date: NaiveDate) -> bool {
        self.check_in_history.iter().any(|e| e.date == date) || self.stats.has_any()
    }

    /// Whether anything at all was recorded (history or stats).
    pub fn has_data(&self) -> bool {
        !self.check_in_history.is_empty() || self.stats.has_any()
    }

    /// Replace the stats and any history entry for the same date.
    pub fn record(&mut self, entry: CheckInEntry) {
        self.stats = entry.stats();
        self.check_in_history.retain(|e| e.date != entry.date);
        self.check_in_history.push(entry);
    }

    pub fn latest_entry(&self) -> Option<&CheckInEntry> {
        self.check_in_history.last()
    }

    /// Chart value: latest history entry first, then the day's stats.
    pub fn metric_value(&self, metric: Metric) -> f64 {
        match self.latest_entry() {
            Some(entry) => entry.stats().metric(metric),
            None => self.stats.metric(metric),
        }
    }
}

/// Metrics shown on the weekly chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Sleep,
    Water,
    ScreenTime,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Sleep => "sleep",
            Metric::Water => "water",
            Metric::ScreenTime => "screen_time",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Sleep => "hours",
            Metric::Water => "glasses",
            Metric::ScreenTime => "hours",
        }
    }
}
