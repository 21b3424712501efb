use clap::Parser;
use std::process::ExitCode;

use habit_lib::presentation::cli::{self, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli::run(cli).await {
        Ok(output) => {
            match serde_json::to_string_pretty(&output) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("Failed to render output: {}", e);
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("Command failed: {}", err);
            match serde_json::to_string_pretty(&err) {
                Ok(text) => eprintln!("{}", text),
                Err(_) => eprintln!("{}", err),
            }
            ExitCode::FAILURE
        }
    }
}
