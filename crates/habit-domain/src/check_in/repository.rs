use async_trait::async_trait;
use chrono::NaiveDate;

use super::value_objects::{CheckInEntry, DayData};
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// Stored day data for a user on a date, if any was ever saved.
    async fn find_day(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<DayData>, DomainError>;

    /// Save (upsert) a check-in entry.
    ///
    /// The day's stats are replaced and an existing history entry for the
    /// same date is overwritten.
    async fn save_check_in(&self, user_id: &UserId, entry: &CheckInEntry)
        -> Result<(), DomainError>;

    /// List stored days in an inclusive date range, ascending by date.
    async fn list_days_in_range(
        &self,
        user_id: &UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<(NaiveDate, DayData)>, DomainError>;

    /// Whether the user has a valid check-in on `date`.
    async fn has_valid_check_in(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<bool, DomainError> {
        Ok(self
            .find_day(user_id, date)
            .await?
            .is_some_and(|day| day.has_valid_check_in(date)))
    }
}
