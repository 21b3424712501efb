use chrono::NaiveDate;
use log::info;
use std::collections::HashMap;

use crate::application::dtos::{ChartDto, ChartPointDto};
use habit_domain::calendar::{self, DayName};
use habit_domain::check_in::{CheckInRepository, DayData, Metric};
use habit_domain::shared::{DomainError, UserId};

pub async fn get_chart(
    repo: &dyn CheckInRepository,
    user_id: &str,
    today: NaiveDate,
    metric: Metric,
) -> Result<ChartDto, DomainError> {
    let dates = calendar::chart_dates(today);
    let user = UserId::from_string(user_id);
    let (Some(start), Some(end)) = (dates.first().copied(), dates.last().copied()) else {
        return Err(DomainError::Validation("Empty chart range".to_string()));
    };

    let stored: HashMap<NaiveDate, DayData> = repo
        .list_days_in_range(&user, start, end)
        .await?
        .into_iter()
        .collect();

    let points: Vec<ChartPointDto> = dates
        .into_iter()
        .map(|date| ChartPointDto {
            date: date.format("%Y-%m-%d").to_string(),
            day_name: DayName::of(date).to_string(),
            value: stored
                .get(&date)
                .map(|data| data.metric_value(metric))
                .unwrap_or(0.0),
        })
        .collect();
    let has_data = points.iter().any(|p| p.value > 0.0);

    info!(
        "[chart] user_id={} metric={} has_data={}",
        user_id,
        metric.as_str(),
        has_data
    );

    Ok(ChartDto {
        user_id: user_id.to_string(),
        metric: metric.as_str().to_string(),
        unit: metric.unit().to_string(),
        has_data,
        points,
    })
}
