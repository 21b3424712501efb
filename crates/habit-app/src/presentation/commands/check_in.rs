use chrono::NaiveDate;

use crate::application::commands::check_in_commands::SaveCheckInCommand;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::dtos::CheckInDto;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;

/// Record the daily check-in (stored for yesterday)
pub async fn save_check_in(
    state: &AppState,
    user_id: &str,
    today: NaiveDate,
    sleep: f64,
    water: f64,
    screen_time: f64,
) -> Result<CheckInDto, CommandError> {
    let command = SaveCheckInCommand {
        user_id: user_id.to_string(),
        sleep,
        water,
        screen_time,
        today,
    };

    Ok(state.command_handlers.save_check_in.handle(command).await?)
}
