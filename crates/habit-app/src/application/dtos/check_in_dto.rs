use chrono::NaiveDate;
use habit_domain::calendar::DayName;
use habit_domain::check_in::{CheckInEntry, DayStats};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInDto {
    pub date: String, // YYYY-MM-DD
    pub sleep: f64,
    pub water: f64,
    pub screen_time: f64,
}

impl From<&CheckInEntry> for CheckInDto {
    fn from(entry: &CheckInEntry) -> Self {
        Self {
            date: entry.date.format("%Y-%m-%d").to_string(),
            sleep: entry.sleep,
            water: entry.water,
            screen_time: entry.screen_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySummaryDto {
    pub date: String,
    pub day_name: String,
    pub is_today: bool,
    pub has_check_in: bool,
    pub sleep: f64,
    pub water: f64,
    pub screen_time: f64,
}

impl DaySummaryDto {
    pub fn new(date: NaiveDate, is_today: bool, has_check_in: bool, stats: DayStats) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            day_name: DayName::of(date).to_string(),
            is_today,
            has_check_in,
            sleep: stats.sleep,
            water: stats.water,
            screen_time: stats.screen_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekOverviewDto {
    pub user_id: String,
    pub today: String,
    pub days: Vec<DaySummaryDto>, // oldest first
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPointDto {
    pub date: String,
    pub day_name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDto {
    pub user_id: String,
    pub metric: String,
    pub unit: String,
    pub has_data: bool,
    pub points: Vec<ChartPointDto>,
}
