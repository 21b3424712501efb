use chrono::NaiveDate;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::goal_commands::*;
use crate::application::dtos::{GoalDto, GoalListDto};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use habit_domain::calendar::DayName;

pub async fn create_goal(
    state: &AppState,
    user_id: &str,
    today: NaiveDate,
    title: String,
    description: String,
    deadline: String,
) -> Result<GoalDto, CommandError> {
    let command = CreateGoalCommand {
        user_id: user_id.to_string(),
        title,
        description,
        deadline,
        today,
    };

    Ok(state.command_handlers.create_goal.handle(command).await?)
}

pub async fn list_goals(
    state: &AppState,
    user_id: &str,
    today: NaiveDate,
    day: Option<DayName>,
) -> Result<GoalListDto, CommandError> {
    Ok(state.queries.goal.list_goals(user_id, day, today).await?)
}

pub async fn update_goal(
    state: &AppState,
    user_id: &str,
    today: NaiveDate,
    goal_id: String,
    title: Option<String>,
    description: Option<String>,
    deadline: Option<String>,
) -> Result<GoalDto, CommandError> {
    if title.is_none() && description.is_none() && deadline.is_none() {
        return Err(CommandError::validation(
            "Nothing to update: pass --title, --description or --deadline",
        ));
    }

    let command = UpdateGoalCommand {
        user_id: user_id.to_string(),
        goal_id,
        title,
        description,
        deadline,
        today,
    };

    Ok(state.command_handlers.update_goal.handle(command).await?)
}

pub async fn complete_goal(
    state: &AppState,
    user_id: &str,
    goal_id: String,
) -> Result<GoalDto, CommandError> {
    let command = CompleteGoalCommand {
        user_id: user_id.to_string(),
        goal_id,
    };

    Ok(state.command_handlers.complete_goal.handle(command).await?)
}

pub async fn delete_goal(
    state: &AppState,
    user_id: &str,
    goal_id: String,
) -> Result<(), CommandError> {
    let command = DeleteGoalCommand {
        user_id: user_id.to_string(),
        goal_id,
    };

    Ok(state.command_handlers.delete_goal.handle(command).await?)
}
