// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod calendar;
pub mod check_in;
pub mod goal;
pub mod shared;
pub mod streak;

// Re-exports for convenience
pub use shared::{DomainError, GoalId, UserId};
