use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::GoalDto;

// ============================================================
// Create Goal Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGoalCommand {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub today: NaiveDate,
}

impl Command for CreateGoalCommand {}

pub type CreateGoalResult = GoalDto;

// ============================================================
// Update Goal Command
// ============================================================

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGoalCommand {
    pub user_id: String,
    pub goal_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub today: NaiveDate,
}

impl Command for UpdateGoalCommand {}

pub type UpdateGoalResult = GoalDto;

// ============================================================
// Complete Goal Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteGoalCommand {
    pub user_id: String,
    pub goal_id: String,
}

impl Command for CompleteGoalCommand {}

pub type CompleteGoalResult = GoalDto;

// ============================================================
// Delete Goal Command
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteGoalCommand {
    pub user_id: String,
    pub goal_id: String,
}

impl Command for DeleteGoalCommand {}

pub type DeleteGoalResult = ();
