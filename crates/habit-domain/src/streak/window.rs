use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whether a user had a valid check-in on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInRecord {
    pub date: NaiveDate,
    pub has_valid_check_in: bool,
}

/// Date-keyed check-in flags over a trailing window ending today.
///
/// Keys are unique and ordered, so iteration is always chronological.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreakWindow {
    days: BTreeMap<NaiveDate, bool>,
}

impl StreakWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later records for the same date overwrite earlier ones.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CheckInRecord>,
    {
        let days = records
            .into_iter()
            .map(|r| (r.date, r.has_valid_check_in))
            .collect();
        Self { days }
    }

    pub fn insert(&mut self, date: NaiveDate, has_valid_check_in: bool) {
        self.days.insert(date, has_valid_check_in);
    }

    /// Flag for `date`; dates outside the window read as `false`.
    pub fn is_checked_in(&self, date: NaiveDate) -> bool {
        self.days.get(&date).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (NaiveDate, bool)> + '_ {
        self.days.iter().map(|(date, flag)| (*date, *flag))
    }

    pub fn checked_in_days(&self) -> usize {
        self.days.values().filter(|flag| **flag).count()
    }
}

impl FromIterator<(NaiveDate, bool)> for StreakWindow {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, bool)>>(iter: T) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}
