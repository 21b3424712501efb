use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::persistence::RepositoryErrorMapper;
use habit_domain::check_in::{CheckInEntry, CheckInRepository, DayData, DayStats};
use habit_domain::shared::{DomainError, UserId};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(FromRow)]
struct DailyStatsRow {
    stat_date: String,
    sleep: f64,
    water: f64,
    screen_time: f64,
}

#[derive(FromRow)]
struct HistoryRow {
    entry_date: String,
    sleep: f64,
    water: f64,
    screen_time: f64,
}

fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| DomainError::DataIntegrity(format!("Invalid stored date: {} ({})", value, e)))
}

impl DailyStatsRow {
    fn try_into_parts(self) -> Result<(NaiveDate, DayStats), DomainError> {
        Ok((
            parse_date(&self.stat_date)?,
            DayStats {
                sleep: self.sleep,
                water: self.water,
                screen_time: self.screen_time,
            },
        ))
    }
}

impl HistoryRow {
    fn try_into_entry(self) -> Result<CheckInEntry, DomainError> {
        Ok(CheckInEntry {
            date: parse_date(&self.entry_date)?,
            sleep: self.sleep,
            water: self.water,
            screen_time: self.screen_time,
        })
    }
}

pub struct SqliteCheckInRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCheckInRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckInRepository for SqliteCheckInRepository {
    async fn find_day(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<DayData>, DomainError> {
        let day = date.format(DATE_FORMAT).to_string();

        let stats: Option<DailyStatsRow> = sqlx::query_as(
            r#"
            SELECT stat_date, sleep, water, screen_time
            FROM daily_stats
            WHERE user_id = ?1 AND stat_date = ?2
            "#,
        )
        .bind(user_id.as_str())
        .bind(&day)
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "daily_stats"))?;

        let history: Vec<HistoryRow> = sqlx::query_as(
            r#"
            SELECT entry_date, sleep, water, screen_time
            FROM check_in_history
            WHERE user_id = ?1 AND entry_date = ?2
            ORDER BY recorded_at ASC
            "#,
        )
        .bind(user_id.as_str())
        .bind(&day)
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "check_in_history"))?;

        if stats.is_none() && history.is_empty() {
            return Ok(None);
        }

        let stats = match stats {
            Some(row) => row.try_into_parts()?.1,
            None => DayStats::empty(),
        };
        let check_in_history = history
            .into_iter()
            .map(HistoryRow::try_into_entry)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(DayData {
            stats,
            check_in_history,
        }))
    }

    async fn save_check_in(
        &self,
        user_id: &UserId,
        entry: &CheckInEntry,
    ) -> Result<(), DomainError> {
        let day = entry.date.format(DATE_FORMAT).to_string();
        let now = Utc::now();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "begin check-in"))?;

        sqlx::query(
            r#"
            INSERT INTO daily_stats (user_id, stat_date, sleep, water, screen_time, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT (user_id, stat_date) DO UPDATE SET
                sleep = excluded.sleep,
                water = excluded.water,
                screen_time = excluded.screen_time,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(user_id.as_str())
        .bind(&day)
        .bind(entry.sleep)
        .bind(entry.water)
        .bind(entry.screen_time)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "daily_stats"))?;

        sqlx::query(
            r#"
            INSERT OR REPLACE INTO check_in_history (
                user_id, entry_date, sleep, water, screen_time, recorded_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(user_id.as_str())
        .bind(&day)
        .bind(entry.sleep)
        .bind(entry.water)
        .bind(entry.screen_time)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "check_in_history"))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "commit check-in"))?;

        Ok(())
    }

    async fn list_days_in_range(
        &self,
        user_id: &UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<(NaiveDate, DayData)>, DomainError> {
        let start = start_date.format(DATE_FORMAT).to_string();
        let end = end_date.format(DATE_FORMAT).to_string();

        let stats_rows: Vec<DailyStatsRow> = sqlx::query_as(
            r#"
            SELECT stat_date, sleep, water, screen_time
            FROM daily_stats
            WHERE user_id = ?1 AND stat_date >= ?2 AND stat_date <= ?3
            ORDER BY stat_date ASC
            "#,
        )
        .bind(user_id.as_str())
        .bind(&start)
        .bind(&end)
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "daily_stats"))?;

        let history_rows: Vec<HistoryRow> = sqlx::query_as(
            r#"
            SELECT entry_date, sleep, water, screen_time
            FROM check_in_history
            WHERE user_id = ?1 AND entry_date >= ?2 AND entry_date <= ?3
            ORDER BY entry_date ASC, recorded_at ASC
            "#,
        )
        .bind(user_id.as_str())
        .bind(&start)
        .bind(&end)
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| RepositoryErrorMapper::map_sqlx_error(e, "check_in_history"))?;

        let mut days: BTreeMap<NaiveDate, DayData> = BTreeMap::new();
        for row in stats_rows {
            let (date, stats) = row.try_into_parts()?;
            days.entry(date).or_default().stats = stats;
        }
        for row in history_rows {
            let entry = row.try_into_entry()?;
            days.entry(entry.date).or_default().check_in_history.push(entry);
        }

        Ok(days.into_iter().collect())
    }
}
