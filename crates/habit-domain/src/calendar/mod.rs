//! Calendar helpers for the day selector and the weekly chart.
//!
//! Every helper takes `today` explicitly so callers decide which clock
//! (or which fixed date, in tests) drives the result.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

/// Number of days shown by the day selector and the weekly chart.
pub const WEEK_LEN: i64 = 7;

/// Years accepted for `today`. The widest streak window stays well inside
/// chrono's range from any of them.
pub const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Day labels used by the selector and the chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayName {
    Sun,
    Mon,
    Tues,
    Wed,
    Thurs,
    Fri,
    Sat,
}

impl DayName {
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sun => DayName::Sun,
            Weekday::Mon => DayName::Mon,
            Weekday::Tue => DayName::Tues,
            Weekday::Wed => DayName::Wed,
            Weekday::Thu => DayName::Thurs,
            Weekday::Fri => DayName::Fri,
            Weekday::Sat => DayName::Sat,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayName::Sun => "Sun",
            DayName::Mon => "Mon",
            DayName::Tues => "Tues",
            DayName::Wed => "Wed",
            DayName::Thurs => "Thurs",
            DayName::Fri => "Fri",
            DayName::Sat => "Sat",
        }
    }
}

impl fmt::Display for DayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sun" => Ok(DayName::Sun),
            "Mon" => Ok(DayName::Mon),
            "Tues" => Ok(DayName::Tues),
            "Wed" => Ok(DayName::Wed),
            "Thurs" => Ok(DayName::Thurs),
            "Fri" => Ok(DayName::Fri),
            "Sat" => Ok(DayName::Sat),
            other => Err(DomainError::InvalidInput(format!(
                "Unknown day name: {}",
                other
            ))),
        }
    }
}

/// Reject dates whose trailing windows would fall off the calendar.
pub fn ensure_supported_date(today: NaiveDate) -> Result<NaiveDate, DomainError> {
    if SUPPORTED_YEARS.contains(&today.year()) {
        Ok(today)
    } else {
        Err(DomainError::InvalidInput(format!(
            "Date out of range: {} (years {}..={})",
            today,
            SUPPORTED_YEARS.start(),
            SUPPORTED_YEARS.end()
        )))
    }
}

/// The day check-ins are recorded for.
pub fn yesterday(today: NaiveDate) -> NaiveDate {
    today - Duration::days(1)
}

/// Today and the six previous days, oldest first.
pub fn available_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (0..WEEK_LEN)
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect()
}

/// The seven days before today, oldest first. Today is not part of the chart.
pub fn chart_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (1..=WEEK_LEN)
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect()
}

/// Resolve a day name to its date within the available week.
pub fn date_for_day(day: DayName, today: NaiveDate) -> Option<NaiveDate> {
    available_dates(today)
        .into_iter()
        .find(|date| DayName::of(*date) == day)
}

/// Trailing window of `len` days ending at `today`, most recent first.
pub fn trailing_dates(today: NaiveDate, len: u32) -> Vec<NaiveDate> {
    (0..i64::from(len))
        .map(|offset| today - Duration::days(offset))
        .collect()
}
