use habit_domain::streak::DayCell;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCellDto {
    pub day_of_month: u32,
    pub completed: bool,
    pub is_today: bool,
}

impl From<DayCell> for DayCellDto {
    fn from(cell: DayCell) -> Self {
        Self {
            day_of_month: cell.day_of_month,
            completed: cell.completed,
            is_today: cell.is_today,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakOverviewDto {
    pub user_id: String,
    pub current_streak: u32,
    pub best_streak: u32,
    pub recent_days: Vec<DayCellDto>, // oldest first, last cell is today
    pub message: String,
    pub window_days: u32,
}
