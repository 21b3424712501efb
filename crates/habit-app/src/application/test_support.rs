// In-memory repositories shared by the application tests

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

use habit_domain::calendar::DayName;
use habit_domain::check_in::{CheckInEntry, CheckInRepository, DayData, DayStats};
use habit_domain::goal::{Goal, GoalRepository};
use habit_domain::shared::{DomainError, GoalId, UserId};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub struct MockCheckInRepository {
    days: tokio::sync::RwLock<HashMap<(String, NaiveDate), DayData>>,
}

impl MockCheckInRepository {
    pub fn new() -> Self {
        Self {
            days: tokio::sync::RwLock::new(HashMap::new()),
        }
    }

    /// Record a check-in for `user_id` dated `on`.
    pub async fn seed(&self, user_id: &str, on: NaiveDate, sleep: f64, water: f64, screen: f64) {
        let entry = CheckInEntry::new(on, DayStats::new(sleep, water, screen).unwrap());
        self.save_check_in(&UserId::from_string(user_id), &entry)
            .await
            .unwrap();
    }

    /// Stats row without any history entry.
    pub async fn seed_stats_only(&self, user_id: &str, on: NaiveDate, stats: DayStats) {
        let mut days = self.days.write().await;
        days.entry((user_id.to_string(), on)).or_default().stats = stats;
    }
}

#[async_trait]
impl CheckInRepository for MockCheckInRepository {
    async fn find_day(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<DayData>, DomainError> {
        let days = self.days.read().await;
        Ok(days.get(&(user_id.as_str().to_string(), date)).cloned())
    }

    async fn save_check_in(
        &self,
        user_id: &UserId,
        entry: &CheckInEntry,
    ) -> Result<(), DomainError> {
        let mut days = self.days.write().await;
        days.entry((user_id.as_str().to_string(), entry.date))
            .or_default()
            .record(entry.clone());
        Ok(())
    }

    async fn list_days_in_range(
        &self,
        user_id: &UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<(NaiveDate, DayData)>, DomainError> {
        let days = self.days.read().await;
        let mut found: Vec<(NaiveDate, DayData)> = days
            .iter()
            .filter(|((user, d), _)| {
                user == user_id.as_str() && *d >= start_date && *d <= end_date
            })
            .map(|((_, d), data)| (*d, data.clone()))
            .collect();
        found.sort_by_key(|(d, _)| *d);
        Ok(found)
    }
}

/// Delegates to a `MockCheckInRepository`, except for dates configured to
/// fail or to hang.
pub struct FlakyCheckInRepository {
    inner: MockCheckInRepository,
    failing: HashSet<NaiveDate>,
    slow: HashSet<NaiveDate>,
}

impl FlakyCheckInRepository {
    pub fn new(inner: MockCheckInRepository) -> Self {
        Self {
            inner,
            failing: HashSet::new(),
            slow: HashSet::new(),
        }
    }

    pub fn failing_on(mut self, date: NaiveDate) -> Self {
        self.failing.insert(date);
        self
    }

    pub fn slow_on(mut self, date: NaiveDate) -> Self {
        self.slow.insert(date);
        self
    }
}

#[async_trait]
impl CheckInRepository for FlakyCheckInRepository {
    async fn find_day(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<DayData>, DomainError> {
        if self.failing.contains(&date) {
            return Err(DomainError::Repository("database is locked".to_string()));
        }
        if self.slow.contains(&date) {
            tokio::time::sleep(Duration::from_secs(5)).await;
        }
        self.inner.find_day(user_id, date).await
    }

    async fn save_check_in(
        &self,
        user_id: &UserId,
        entry: &CheckInEntry,
    ) -> Result<(), DomainError> {
        self.inner.save_check_in(user_id, entry).await
    }

    async fn list_days_in_range(
        &self,
        user_id: &UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<(NaiveDate, DayData)>, DomainError> {
        self.inner
            .list_days_in_range(user_id, start_date, end_date)
            .await
    }
}

pub struct MockGoalRepository {
    goals: tokio::sync::RwLock<HashMap<String, Goal>>,
}

impl MockGoalRepository {
    pub fn new() -> Self {
        Self {
            goals: tokio::sync::RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl GoalRepository for MockGoalRepository {
    async fn save(&self, goal: &Goal) -> Result<(), DomainError> {
        let mut goals = self.goals.write().await;
        goals.insert(goal.id().as_str().to_string(), goal.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &GoalId) -> Result<Option<Goal>, DomainError> {
        let goals = self.goals.read().await;
        Ok(goals.get(id.as_str()).cloned())
    }

    async fn find_by_user_and_day(
        &self,
        user_id: &UserId,
        day: DayName,
    ) -> Result<Vec<Goal>, DomainError> {
        let goals = self.goals.read().await;
        let mut found: Vec<Goal> = goals
            .values()
            .filter(|g| g.is_owned_by(user_id) && g.day() == day)
            .cloned()
            .collect();
        found.sort_by_key(|g| g.deadline());
        Ok(found)
    }

    async fn update(&self, goal: &Goal) -> Result<(), DomainError> {
        let mut goals = self.goals.write().await;
        match goals.get_mut(goal.id().as_str()) {
            Some(stored) => {
                *stored = goal.clone();
                Ok(())
            }
            None => Err(DomainError::GoalNotFound(goal.id().to_string())),
        }
    }

    async fn delete(&self, id: &GoalId) -> Result<(), DomainError> {
        let mut goals = self.goals.write().await;
        goals
            .remove(id.as_str())
            .map(|_| ())
            .ok_or_else(|| DomainError::GoalNotFound(id.to_string()))
    }
}
