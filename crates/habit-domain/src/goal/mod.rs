mod aggregate;
mod repository;

pub use aggregate::{parse_deadline, Goal, DEADLINE_FORMAT};
pub use repository::GoalRepository;
