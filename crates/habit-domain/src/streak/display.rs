use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::window::StreakWindow;

pub const DISPLAY_DAYS: usize = 7;

/// One box in the recent-days strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub day_of_month: u32,
    pub completed: bool,
    pub is_today: bool,
}

/// Seven cells for `today - 6 ..= today`, oldest first.
pub fn build_recent_days(window: &StreakWindow, today: NaiveDate) -> Vec<DayCell> {
    (0..DISPLAY_DAYS as i64)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            DayCell {
                day_of_month: date.day(),
                completed: window.is_checked_in(date),
                is_today: offset == 0,
            }
        })
        .collect()
}
