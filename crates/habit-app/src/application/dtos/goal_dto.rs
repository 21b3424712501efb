use habit_domain::goal::{Goal, DEADLINE_FORMAT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub deadline: String, // YYYY-MM-DD HH:MM
    pub completed: bool,
    pub day: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Goal> for GoalDto {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id().as_str().to_string(),
            title: goal.title().to_string(),
            description: goal.description().to_string(),
            deadline: goal.deadline().format(DEADLINE_FORMAT).to_string(),
            completed: goal.is_completed(),
            day: goal.day().to_string(),
            created_at: goal.created_at().to_rfc3339(),
            updated_at: goal.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalListDto {
    pub day: String,
    pub date: String, // YYYY-MM-DD within the selectable week
    pub editable: bool,
    pub goals: Vec<GoalDto>,
}
