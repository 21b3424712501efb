use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::application::commands::handlers::*;
use crate::application::queries::{CheckInStreakQueries, GoalQueries};
use crate::application::services::ConfigService;
use crate::application::ResultExt;
use crate::presentation::state::{AppState, CommandHandlers, Queries, Services};
use habit_domain::check_in::CheckInRepository;
use habit_domain::goal::GoalRepository;
use habit_domain::shared::DomainError;
use habit_infrastructure::logging;
use habit_infrastructure::persistence::{
    repositories::{SqliteCheckInRepository, SqliteGoalRepository},
    Database,
};

pub const APP_DIR_NAME: &str = "habit-tracker";

/// `--data-dir` when given, otherwise the platform data directory
/// (`~/.local/share/habit-tracker` on Linux).
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf, DomainError> {
    match data_dir {
        Some(dir) => Ok(dir),
        None => dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| {
                DomainError::Infrastructure("Failed to resolve the data directory".to_string())
            }),
    }
}

pub fn db_filename() -> &'static str {
    if cfg!(debug_assertions) {
        "habit-dev.db"
    } else {
        "habit.db"
    }
}

/// File logging under `<data_dir>/logs`, console logging if that fails.
pub fn init_logging(data_dir: &Path, config: &ConfigService) {
    let level = config.get_log_level();
    let log_dir = data_dir.join("logs");

    match logging::init_logger(log_dir.clone(), level.as_str()) {
        Ok(()) => info!("File logging initialized at: {}", log_dir.display()),
        Err(e) => {
            logging::init_console_logger(level.as_str());
            warn!("Failed to initialize file logging: {}", e);
        }
    }
}

pub async fn build_app_state(
    data_dir: &Path,
    config: Arc<ConfigService>,
) -> Result<AppState, DomainError> {
    std::fs::create_dir_all(data_dir).to_infra_err()?;

    let db_path = data_dir.join(db_filename());
    let db_path_str = db_path
        .to_str()
        .ok_or_else(|| DomainError::Infrastructure("Invalid database path".to_string()))?;
    info!("Database path: {}", db_path_str);

    let started_at = Instant::now();
    let database = Database::new(db_path_str).await?;
    database.run_migrations().await?;
    info!(
        "Database ready ({}ms)",
        started_at.elapsed().as_millis()
    );

    Ok(build_with_database(&database, config))
}

/// Wire repositories, handlers and queries over an opened database.
pub fn build_with_database(database: &Database, config: Arc<ConfigService>) -> AppState {
    let pool = Arc::new(database.pool().clone());

    let check_in_repo =
        Arc::new(SqliteCheckInRepository::new(pool.clone())) as Arc<dyn CheckInRepository>;
    let goal_repo = Arc::new(SqliteGoalRepository::new(pool)) as Arc<dyn GoalRepository>;

    let command_handlers = CommandHandlers {
        save_check_in: Arc::new(SaveCheckInCommandHandler::new(check_in_repo.clone())),
        create_goal: Arc::new(CreateGoalCommandHandler::new(goal_repo.clone())),
        update_goal: Arc::new(UpdateGoalCommandHandler::new(goal_repo.clone())),
        complete_goal: Arc::new(CompleteGoalCommandHandler::new(goal_repo.clone())),
        delete_goal: Arc::new(DeleteGoalCommandHandler::new(goal_repo.clone())),
    };

    let queries = Queries {
        streak: Arc::new(
            CheckInStreakQueries::new(check_in_repo)
                .with_window_days(config.get_streak_window_days()),
        ),
        goal: Arc::new(GoalQueries::new(goal_repo)),
    };

    AppState {
        services: Services { config },
        command_handlers,
        queries,
    }
}
