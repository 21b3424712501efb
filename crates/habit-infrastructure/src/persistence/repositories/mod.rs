pub mod check_in_repo;
pub mod goal_repo;

pub use check_in_repo::SqliteCheckInRepository;
pub use goal_repo::SqliteGoalRepository;
