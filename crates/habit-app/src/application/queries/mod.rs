mod check_in_streak_queries;
mod goal_queries;


pub use check_in_streak_queries::CheckInStreakQueries;
pub use goal_queries::GoalQueries;
