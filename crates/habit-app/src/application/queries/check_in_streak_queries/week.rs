use chrono::NaiveDate;
use log::info;
use std::collections::HashMap;

use crate::application::dtos::{DaySummaryDto, WeekOverviewDto};
use habit_domain::calendar;
use habit_domain::check_in::{CheckInRepository, DayData, DayStats};
use habit_domain::shared::{DomainError, UserId};

/// Today's slot has no check-in of its own (entries are dated yesterday),
/// so it shows yesterday's values once yesterday is checked in.
pub async fn get_week_overview(
    repo: &dyn CheckInRepository,
    user_id: &str,
    today: NaiveDate,
) -> Result<WeekOverviewDto, DomainError> {
    let dates = calendar::available_dates(today);
    let user = UserId::from_string(user_id);
    let start = dates.first().copied().unwrap_or(today);

    let stored: HashMap<NaiveDate, DayData> = repo
        .list_days_in_range(&user, start, today)
        .await?
        .into_iter()
        .collect();

    let yesterday = calendar::yesterday(today);
    let days = dates
        .into_iter()
        .map(|date| {
            let source = if date == today { yesterday } else { date };
            match stored.get(&source) {
                Some(data) if data.has_valid_check_in(source) => {
                    DaySummaryDto::new(date, date == today, true, data.stats)
                }
                _ => DaySummaryDto::new(date, date == today, false, DayStats::empty()),
            }
        })
        .collect::<Vec<_>>();

    info!(
        "[week] overview user_id={} checked_in={}",
        user_id,
        days.iter().filter(|d| d.has_check_in).count()
    );

    Ok(WeekOverviewDto {
        user_id: user_id.to_string(),
        today: today.format("%Y-%m-%d").to_string(),
        days,
    })
}
