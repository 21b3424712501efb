use async_trait::async_trait;

use super::aggregate::Goal;
use crate::calendar::DayName;
use crate::shared::{DomainError, GoalId, UserId};

/// Goal repository trait
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Save a new goal
    async fn save(&self, goal: &Goal) -> Result<(), DomainError>;

    /// Find a goal by ID
    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError>;

    /// Goals of one user for one day, ordered by deadline ascending
    async fn find_by_user_and_day(
        &self,
        user_id: &UserId,
        day: DayName,
    ) -> Result<Vec<Goal>, DomainError>;

    /// Update an existing goal
    async fn update(&self, goal: &Goal) -> Result<(), DomainError>;

    /// Delete a goal by ID
    async fn delete(&self, id: &GoalId) -> Result<(), DomainError>;
}
