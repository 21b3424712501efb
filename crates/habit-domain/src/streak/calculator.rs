use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::window::StreakWindow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    pub current: u32,
    pub best: u32,
}

/// Current and best streaks over a window.
///
/// The newest counted day is treated as an unconfirmed placeholder, so both
/// totals report one less than the raw run length. `best` never drops below
/// the reported `current`.
pub fn compute_streaks(window: &StreakWindow, today: NaiveDate) -> StreakResult {
    // Newest first; a missing check-in today does not break the run.
    let mut current = 0u32;
    for (date, checked_in) in window.iter().rev() {
        if checked_in {
            current += 1;
        } else if date == today {
            continue;
        } else {
            break;
        }
    }

    let mut best = 0u32;
    let mut run = 0u32;
    for (_, checked_in) in window.iter() {
        if checked_in {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }

    let current = current.saturating_sub(1);
    StreakResult {
        current,
        best: best.saturating_sub(1).max(current),
    }
}
