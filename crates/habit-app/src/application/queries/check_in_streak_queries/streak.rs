use chrono::NaiveDate;
use log::info;

use crate::application::dtos::{DayCellDto, StreakOverviewDto};
use habit_domain::streak::{build_recent_days, compute_streaks, message_for, StreakWindow};

pub fn build_overview(
    user_id: &str,
    window: &StreakWindow,
    today: NaiveDate,
    window_days: u32,
) -> StreakOverviewDto {
    let streaks = compute_streaks(window, today);
    let recent_days = build_recent_days(window, today)
        .into_iter()
        .map(DayCellDto::from)
        .collect();

    info!(
        "[streak] overview user_id={} current={} best={} checked_in_days={}/{}",
        user_id,
        streaks.current,
        streaks.best,
        window.checked_in_days(),
        window.len()
    );

    StreakOverviewDto {
        user_id: user_id.to_string(),
        current_streak: streaks.current,
        best_streak: streaks.best,
        recent_days,
        message: message_for(streaks.current).to_string(),
        window_days,
    }
}
