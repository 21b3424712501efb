use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::dtos::{ChartDto, StreakOverviewDto, WeekOverviewDto};
use habit_domain::check_in::{CheckInRepository, Metric};
use habit_domain::shared::{DomainError, UserId};
use habit_domain::streak::{StreakWindow, DEFAULT_WINDOW_DAYS};
use habit_infrastructure::config::TimeoutConfig;

mod chart;
mod loader;
mod streak;
mod week;


pub struct CheckInStreakQueries {
    check_in_repo: Arc<dyn CheckInRepository>,
    timeouts: TimeoutConfig,
    window_days: u32,
}

impl CheckInStreakQueries {
    pub fn new(check_in_repo: Arc<dyn CheckInRepository>) -> Self {
        Self {
            check_in_repo,
            timeouts: TimeoutConfig::global().clone(),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Length of the trailing window streaks are computed over.
    pub fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days;
        self
    }

    pub fn with_timeouts(mut self, timeouts: TimeoutConfig) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Check-in flags for the trailing window ending at `today`.
    ///
    /// Never fails: a date whose lookup errors or times out reads as `false`.
    pub async fn load_window(&self, user_id: &str, today: NaiveDate) -> StreakWindow {
        loader::load_window(
            self.check_in_repo.as_ref(),
            &UserId::from_string(user_id),
            today,
            self.window_days,
            self.timeouts.probe,
        )
        .await
    }

    /// Current/best streak, the recent-days strip and the encouragement message
    pub async fn get_streak_overview(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<StreakOverviewDto, DomainError> {
        let window = self.load_window(user_id, today).await;
        Ok(streak::build_overview(
            user_id,
            &window,
            today,
            self.window_days,
        ))
    }

    /// The seven selectable days ending today
    pub async fn get_week_overview(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<WeekOverviewDto, DomainError> {
        week::get_week_overview(self.check_in_repo.as_ref(), user_id, today).await
    }

    /// One metric over the seven days before today
    pub async fn get_chart(
        &self,
        user_id: &str,
        today: NaiveDate,
        metric: Metric,
    ) -> Result<ChartDto, DomainError> {
        chart::get_chart(self.check_in_repo.as_ref(), user_id, today, metric).await
    }
}
