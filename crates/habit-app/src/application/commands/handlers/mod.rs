mod goal_handlers;
mod save_check_in_handler;

#[cfg(test)]
mod tests;

pub use goal_handlers::*;
pub use save_check_in_handler::SaveCheckInCommandHandler;
