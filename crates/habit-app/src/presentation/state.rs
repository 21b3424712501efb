use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::queries::{CheckInStreakQueries, GoalQueries};
use crate::application::services::ConfigService;

/// Command handlers container
pub struct CommandHandlers {
    pub save_check_in: Arc<SaveCheckInCommandHandler>,
    pub create_goal: Arc<CreateGoalCommandHandler>,
    pub update_goal: Arc<UpdateGoalCommandHandler>,
    pub complete_goal: Arc<CompleteGoalCommandHandler>,
    pub delete_goal: Arc<DeleteGoalCommandHandler>,
}

pub struct Services {
    pub config: Arc<ConfigService>,
}

pub struct Queries {
    pub streak: Arc<CheckInStreakQueries>,
    pub goal: Arc<GoalQueries>,
}

pub struct AppState {
    pub services: Services,
    pub command_handlers: CommandHandlers,
    pub queries: Queries,
}
