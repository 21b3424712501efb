use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::DayName;
use crate::shared::{DomainError, GoalId, UserId};

pub const DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Goal aggregate root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    id: GoalId,
    user_id: UserId,
    title: String,
    description: String,
    deadline: NaiveDateTime,
    completed: bool,
    day: DayName,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Goal {
    /// Create a goal for `today`'s day; goals can only be set for the current day.
    pub fn new(
        user_id: UserId,
        title: String,
        description: String,
        deadline: &str,
        day: DayName,
        today: NaiveDate,
    ) -> Result<Self, DomainError> {
        ensure_editable(day, today)?;
        let title = validate_title(title)?;
        let deadline = parse_deadline(deadline)?;
        let now = Utc::now();

        Ok(Self {
            id: GoalId::new(),
            user_id,
            title,
            description,
            deadline,
            completed: false,
            day,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstruct from persistence
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: GoalId,
        user_id: UserId,
        title: String,
        description: String,
        deadline: NaiveDateTime,
        completed: bool,
        day: DayName,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            description,
            deadline,
            completed,
            day,
            created_at,
            updated_at,
        }
    }

    // Getters
    pub fn id(&self) -> &GoalId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn deadline(&self) -> NaiveDateTime {
        self.deadline
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn day(&self) -> DayName {
        self.day
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    // Business methods

    /// Edit title, description and deadline; completion is kept.
    pub fn edit(
        &mut self,
        title: String,
        description: String,
        deadline: &str,
        today: NaiveDate,
    ) -> Result<(), DomainError> {
        ensure_editable(self.day, today)?;
        self.title = validate_title(title)?;
        self.deadline = parse_deadline(deadline)?;
        self.description = description;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn complete(&mut self) {
        self.completed = true;
        self.updated_at = Utc::now();
    }
}

fn ensure_editable(day: DayName, today: NaiveDate) -> Result<(), DomainError> {
    let current = DayName::of(today);
    if day != current {
        return Err(DomainError::Validation(format!(
            "You can only create or edit goals for today ({})",
            current
        )));
    }
    Ok(())
}

fn validate_title(title: String) -> Result<String, DomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(
            "Goal title cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

pub fn parse_deadline(deadline: &str) -> Result<NaiveDateTime, DomainError> {
    NaiveDateTime::parse_from_str(deadline.trim(), DEADLINE_FORMAT).map_err(|_| {
        DomainError::Validation(format!(
            "Invalid deadline '{}', expected YYYY-MM-DD HH:MM",
            deadline
        ))
    })
}
