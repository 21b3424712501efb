//! Streak derivation: current/best streak counts, the recent-days strip
//! and the encouragement message shown next to them.
//!
//! Everything here is pure; `today` is always passed in.

mod calculator;
mod display;
mod encouragement;
mod window;

#[cfg(test)]
mod calculator_test;

pub use calculator::{compute_streaks, StreakResult};
pub use display::{build_recent_days, DayCell, DISPLAY_DAYS};
pub use encouragement::{message_for, EncouragementTier};
pub use window::{CheckInRecord, StreakWindow};

/// Default length of the trailing window streaks are evaluated over.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;
