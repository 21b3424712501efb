use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::goal_commands::*;
use crate::application::dtos::GoalDto;
use habit_domain::calendar::DayName;
use habit_domain::goal::{Goal, GoalRepository, DEADLINE_FORMAT};
use habit_domain::shared::{DomainError, GoalId, UserId};

/// Load a goal and check it belongs to `user_id`. Someone else's goal reads
/// as missing.
async fn load_owned_goal(
    goal_repo: &dyn GoalRepository,
    user_id: &str,
    goal_id: &str,
) -> Result<Goal, DomainError> {
    let user_id = UserId::from_string(user_id);
    goal_repo
        .find_by_id(&GoalId::from_string(goal_id))
        .await?
        .filter(|goal| goal.is_owned_by(&user_id))
        .ok_or_else(|| DomainError::NotFound(format!("Goal not found: {}", goal_id)))
}

/// Create goal command handler
pub struct CreateGoalCommandHandler {
    goal_repo: Arc<dyn GoalRepository>,
}

impl CreateGoalCommandHandler {
    pub fn new(goal_repo: Arc<dyn GoalRepository>) -> Self {
        Self { goal_repo }
    }
}

#[async_trait]
impl CommandHandler<CreateGoalCommand> for CreateGoalCommandHandler {
    type Result = CreateGoalResult;

    async fn handle(&self, cmd: CreateGoalCommand) -> Result<Self::Result, DomainError> {
        info!("[goal] creating goal for user_id={}", cmd.user_id);

        let goal = Goal::new(
            UserId::from_string(&cmd.user_id),
            cmd.title,
            cmd.description,
            &cmd.deadline,
            DayName::of(cmd.today),
            cmd.today,
        )?;

        self.goal_repo.save(&goal).await?;

        info!("[goal] created goal_id={} day={}", goal.id(), goal.day());
        Ok(GoalDto::from(&goal))
    }
}

/// Update goal command handler
pub struct UpdateGoalCommandHandler {
    goal_repo: Arc<dyn GoalRepository>,
}

impl UpdateGoalCommandHandler {
    pub fn new(goal_repo: Arc<dyn GoalRepository>) -> Self {
        Self { goal_repo }
    }
}

#[async_trait]
impl CommandHandler<UpdateGoalCommand> for UpdateGoalCommandHandler {
    type Result = UpdateGoalResult;

    async fn handle(&self, cmd: UpdateGoalCommand) -> Result<Self::Result, DomainError> {
        info!("[goal] updating goal_id={}", cmd.goal_id);

        let mut goal = load_owned_goal(self.goal_repo.as_ref(), &cmd.user_id, &cmd.goal_id).await?;

        let title = cmd.title.unwrap_or_else(|| goal.title().to_string());
        let description = cmd
            .description
            .unwrap_or_else(|| goal.description().to_string());
        let deadline = cmd
            .deadline
            .unwrap_or_else(|| goal.deadline().format(DEADLINE_FORMAT).to_string());

        goal.edit(title, description, &deadline, cmd.today)?;
        self.goal_repo.update(&goal).await?;

        info!("[goal] updated goal_id={}", goal.id());
        Ok(GoalDto::from(&goal))
    }
}

/// Complete goal command handler
pub struct CompleteGoalCommandHandler {
    goal_repo: Arc<dyn GoalRepository>,
}

impl CompleteGoalCommandHandler {
    pub fn new(goal_repo: Arc<dyn GoalRepository>) -> Self {
        Self { goal_repo }
    }
}

#[async_trait]
impl CommandHandler<CompleteGoalCommand> for CompleteGoalCommandHandler {
    type Result = CompleteGoalResult;

    async fn handle(&self, cmd: CompleteGoalCommand) -> Result<Self::Result, DomainError> {
        let mut goal = load_owned_goal(self.goal_repo.as_ref(), &cmd.user_id, &cmd.goal_id).await?;

        goal.complete();
        self.goal_repo.update(&goal).await?;

        info!("[goal] completed goal_id={}", goal.id());
        Ok(GoalDto::from(&goal))
    }
}

/// Delete goal command handler
pub struct DeleteGoalCommandHandler {
    goal_repo: Arc<dyn GoalRepository>,
}

impl DeleteGoalCommandHandler {
    pub fn new(goal_repo: Arc<dyn GoalRepository>) -> Self {
        Self { goal_repo }
    }
}

#[async_trait]
impl CommandHandler<DeleteGoalCommand> for DeleteGoalCommandHandler {
    type Result = DeleteGoalResult;

    async fn handle(&self, cmd: DeleteGoalCommand) -> Result<Self::Result, DomainError> {
        let goal = load_owned_goal(self.goal_repo.as_ref(), &cmd.user_id, &cmd.goal_id).await?;

        self.goal_repo.delete(goal.id()).await?;

        info!("[goal] deleted goal_id={}", goal.id());
        Ok(())
    }
}
