use chrono::NaiveDate;

use crate::application::dtos::{ChartDto, StreakOverviewDto, WeekOverviewDto};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use habit_domain::check_in::Metric;

/// Get the streak overview for a user
pub async fn get_streak_overview(
    state: &AppState,
    user_id: &str,
    today: NaiveDate,
) -> Result<StreakOverviewDto, CommandError> {
    Ok(state
        .queries
        .streak
        .get_streak_overview(user_id, today)
        .await?)
}

/// Get the seven selectable days ending today
pub async fn get_week_overview(
    state: &AppState,
    user_id: &str,
    today: NaiveDate,
) -> Result<WeekOverviewDto, CommandError> {
    Ok(state.queries.streak.get_week_overview(user_id, today).await?)
}

/// Get one metric for the seven days before today
pub async fn get_chart(
    state: &AppState,
    user_id: &str,
    today: NaiveDate,
    metric: Metric,
) -> Result<ChartDto, CommandError> {
    Ok(state.queries.streak.get_chart(user_id, today, metric).await?)
}
