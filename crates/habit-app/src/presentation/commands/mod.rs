// Module declarations
pub mod check_in;
pub mod config;
pub mod goal;
pub mod streak;

// Re-export all commands for easy access
pub use check_in::*;
pub use config::*;
pub use goal::*;
pub use streak::*;
