use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::commands::command_handler::Command;
use crate::application::dtos::CheckInDto;

// ============================================================
// Save Check-In Command
// ============================================================

/// Record the daily form. The entry is dated the day before `today`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveCheckInCommand {
    pub user_id: String,
    pub sleep: f64,
    pub water: f64,
    pub screen_time: f64,
    pub today: NaiveDate,
}

impl Command for SaveCheckInCommand {}

pub type SaveCheckInResult = CheckInDto;
