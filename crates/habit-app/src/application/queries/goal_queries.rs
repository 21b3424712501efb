use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::dtos::{GoalDto, GoalListDto};
use habit_domain::calendar::{self, DayName};
use habit_domain::goal::GoalRepository;
use habit_domain::shared::{DomainError, UserId};

pub struct GoalQueries {
    goal_repo: Arc<dyn GoalRepository>,
}

impl GoalQueries {
    pub fn new(goal_repo: Arc<dyn GoalRepository>) -> Self {
        Self { goal_repo }
    }

    /// Goals for `day` (today's day when `None`), earliest deadline first.
    pub async fn list_goals(
        &self,
        user_id: &str,
        day: Option<DayName>,
        today: NaiveDate,
    ) -> Result<GoalListDto, DomainError> {
        let current = DayName::of(today);
        let day = day.unwrap_or(current);
        let date = calendar::date_for_day(day, today).ok_or_else(|| {
            DomainError::InvalidInput(format!("{} is not in the selectable week", day))
        })?;

        let goals = self
            .goal_repo
            .find_by_user_and_day(&UserId::from_string(user_id), day)
            .await?;

        Ok(GoalListDto {
            day: day.to_string(),
            date: date.format("%Y-%m-%d").to_string(),
            editable: day == current,
            goals: goals.iter().map(GoalDto::from).collect(),
        })
    }
}
