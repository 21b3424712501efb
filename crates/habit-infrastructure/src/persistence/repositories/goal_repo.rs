use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;
use std::sync::Arc;

use crate::persistence::RepositoryErrorMapper;
use habit_domain::calendar::DayName;
use habit_domain::goal::{Goal, GoalRepository, DEADLINE_FORMAT};
use habit_domain::shared::{DomainError, GoalId, UserId};

#[derive(FromRow)]
struct GoalRow {
    id: String,
    user_id: String,
    title: String,
    description: String,
    deadline: String,
    completed: bool,
    day: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl GoalRow {
    #[allow(clippy::wrong_self_convention)]
    fn to_domain(self) -> Result<Goal, DomainError> {
        let deadline = NaiveDateTime::parse_from_str(&self.deadline, DEADLINE_FORMAT).map_err(
            |e| DomainError::DataIntegrity(format!("Invalid stored deadline: {} ({})", self.deadline, e)),
        )?;
        let day = DayName::from_str(&self.day)?;

        Ok(Goal::from_persistence(
            GoalId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            self.title,
            self.description,
            deadline,
            self.completed,
            day,
            self.created_at,
            self.updated_at,
        ))
    }
}

pub struct SqliteGoalRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteGoalRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalRepository for SqliteGoalRepository {
    async fn save(&self, goal: &Goal) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO goals (
                id, user_id, title, description, deadline, completed, day, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(goal.id().as_str())
        .bind(goal.user_id().as_str())
        .bind(goal.title())
        .bind(goal.description())
        .bind(goal.deadline().format(DEADLINE_FORMAT).to_string())
        .bind(goal.is_completed())
        .bind(goal.day().as_str())
        .bind(goal.created_at())
        .bind(goal.updated_at())
        .execute(&*self.pool)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "goals"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError> {
        let row: Option<GoalRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, title, description, deadline, completed, day, created_at, updated_at
            FROM goals
            WHERE id = ?1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "goals"))?;

        row.map(|r| r.to_domain()).transpose()
    }

    async fn find_by_user_and_day(
        &self,
        user_id: &UserId,
        day: DayName,
    ) -> Result<Vec<Goal>, DomainError> {
        let rows: Vec<GoalRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, title, description, deadline, completed, day, created_at, updated_at
            FROM goals
            WHERE user_id = ?1 AND day = ?2
            ORDER BY deadline ASC, created_at ASC
            "#,
        )
        .bind(user_id.as_str())
        .bind(day.as_str())
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "goals"))?;

        rows.into_iter().map(|r| r.to_domain()).collect()
    }

    async fn update(&self, goal: &Goal) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE goals
            SET title = ?1, description = ?2, deadline = ?3, completed = ?4, updated_at = ?5
            WHERE id = ?6
            "#,
        )
        .bind(goal.title())
        .bind(goal.description())
        .bind(goal.deadline().format(DEADLINE_FORMAT).to_string())
        .bind(goal.is_completed())
        .bind(goal.updated_at())
        .bind(goal.id().as_str())
        .execute(&*self.pool)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "goals"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GoalNotFound(goal.id().to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: &GoalId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM goals WHERE id = ?1")
            .bind(id.as_str())
            .execute(&*self.pool)
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "goals"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GoalNotFound(id.to_string()));
        }
        Ok(())
    }
}
