pub mod check_in_commands;
pub mod command_handler;
pub mod goal_commands;
pub mod handlers;
