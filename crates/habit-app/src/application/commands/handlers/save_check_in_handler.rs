use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::check_in_commands::*;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::dtos::CheckInDto;
use habit_domain::calendar;
use habit_domain::check_in::{CheckInEntry, CheckInRepository, DayStats};
use habit_domain::shared::{DomainError, UserId};

/// Save check-in command handler
pub struct SaveCheckInCommandHandler {
    check_in_repo: Arc<dyn CheckInRepository>,
}

impl SaveCheckInCommandHandler {
    pub fn new(check_in_repo: Arc<dyn CheckInRepository>) -> Self {
        Self { check_in_repo }
    }
}

#[async_trait]
impl CommandHandler<SaveCheckInCommand> for SaveCheckInCommandHandler {
    type Result = SaveCheckInResult;

    async fn handle(&self, cmd: SaveCheckInCommand) -> Result<Self::Result, DomainError> {
        let stats = DayStats::new(cmd.sleep, cmd.water, cmd.screen_time)?;
        let user_id = UserId::from_string(&cmd.user_id);
        let entry = CheckInEntry::new(calendar::yesterday(cmd.today), stats);

        self.check_in_repo.save_check_in(&user_id, &entry).await?;

        info!(
            "[check_in] saved user_id={} date={} sleep={} water={} screen_time={}",
            user_id, entry.date, entry.sleep, entry.water, entry.screen_time
        );

        Ok(CheckInDto::from(&entry))
    }
}
