use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::ConfigService;
use crate::presentation::bootstrap;
use crate::presentation::commands;
use crate::presentation::error::CommandError;
use habit_domain::calendar::{self, DayName};
use habit_domain::check_in::Metric;
use habit_domain::shared::DomainError;

#[derive(Parser, Debug)]
#[command(name = "habit")]
#[command(about = "Daily check-ins, streaks and goals")]
#[command(version)]
pub struct Cli {
    /// User the command acts for
    #[arg(short, long, global = true, default_value = "default")]
    pub user: String,

    /// Override today's date (YYYY-MM-DD); defaults to the local date
    #[arg(long, global = true, value_parser = parse_today)]
    pub today: Option<NaiveDate>,

    /// Directory for the database, config and logs
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record the daily check-in (stored for yesterday)
    CheckIn {
        /// Hours slept, in half-hour steps (0-24)
        #[arg(long)]
        sleep: f64,

        /// Glasses of water (0-10)
        #[arg(long)]
        water: f64,

        /// Screen time hours, in half-hour steps (0-12)
        #[arg(long)]
        screen_time: f64,
    },

    /// Show current and best streak with the last seven days
    Streak,

    /// Show the selectable week with each day's stats
    Week,

    /// Show one metric over the seven days before today
    Chart {
        #[arg(long, value_enum)]
        metric: MetricArg,
    },

    /// Manage goals
    Goal {
        #[command(subcommand)]
        action: GoalCommands,
    },

    /// Read or change settings
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Add a goal for today
    Add {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Deadline as "YYYY-MM-DD HH:MM"
        #[arg(long)]
        deadline: String,
    },

    /// List goals for a day (today when omitted)
    List {
        /// Sun, Mon, Tues, Wed, Thurs, Fri or Sat
        #[arg(long)]
        day: Option<DayName>,
    },

    /// Edit one of today's goals
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        deadline: Option<String>,
    },

    /// Mark a goal as completed
    Complete { id: String },

    /// Delete a goal
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    GetLogLevel,
    SetLogLevel { level: String },
    GetStreakWindow,
    SetStreakWindow { days: u32 },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum MetricArg {
    Sleep,
    Water,
    ScreenTime,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Sleep => Metric::Sleep,
            MetricArg::Water => Metric::Water,
            MetricArg::ScreenTime => Metric::ScreenTime,
        }
    }
}

fn parse_today(value: &str) -> Result<NaiveDate, DomainError> {
    let date = value
        .parse::<NaiveDate>()
        .map_err(|e| DomainError::InvalidInput(format!("Invalid date {}: {}", value, e)))?;
    calendar::ensure_supported_date(date)
}

fn to_json<T: Serialize>(value: T) -> Result<serde_json::Value, CommandError> {
    Ok(serde_json::to_value(value)?)
}

fn run_config(
    config: &ConfigService,
    action: ConfigCommands,
) -> Result<serde_json::Value, CommandError> {
    match action {
        ConfigCommands::GetLogLevel => to_json(commands::get_log_level(config)?),
        ConfigCommands::SetLogLevel { level } => to_json(commands::set_log_level(config, &level)?),
        ConfigCommands::GetStreakWindow => to_json(commands::get_streak_window(config)?),
        ConfigCommands::SetStreakWindow { days } => {
            to_json(commands::set_streak_window(config, days)?)
        }
    }
}

/// Execute one CLI invocation and return its JSON output.
pub async fn run(cli: Cli) -> Result<serde_json::Value, CommandError> {
    let data_dir = bootstrap::resolve_data_dir(cli.data_dir)?;
    let config = Arc::new(ConfigService::new(&data_dir)?);
    bootstrap::init_logging(&data_dir, &config);

    // Settings never touch the database
    if let Commands::Config { action } = cli.command {
        return run_config(&config, action);
    }

    let today = calendar::ensure_supported_date(
        cli.today
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
    )?;
    let user = cli.user.as_str();
    let state = bootstrap::build_app_state(&data_dir, config).await?;

    match cli.command {
        Commands::CheckIn {
            sleep,
            water,
            screen_time,
        } => to_json(
            commands::save_check_in(&state, user, today, sleep, water, screen_time).await?,
        ),
        Commands::Streak => to_json(commands::get_streak_overview(&state, user, today).await?),
        Commands::Week => to_json(commands::get_week_overview(&state, user, today).await?),
        Commands::Chart { metric } => {
            to_json(commands::get_chart(&state, user, today, metric.into()).await?)
        }
        Commands::Goal { action } => match action {
            GoalCommands::Add {
                title,
                description,
                deadline,
            } => to_json(
                commands::create_goal(&state, user, today, title, description, deadline).await?,
            ),
            GoalCommands::List { day } => {
                to_json(commands::list_goals(&state, user, today, day).await?)
            }
            GoalCommands::Edit {
                id,
                title,
                description,
                deadline,
            } => to_json(
                commands::update_goal(&state, user, today, id, title, description, deadline)
                    .await?,
            ),
            GoalCommands::Complete { id } => {
                to_json(commands::complete_goal(&state, user, id).await?)
            }
            GoalCommands::Delete { id } => {
                commands::delete_goal(&state, user, id.clone()).await?;
                to_json(serde_json::json!({ "deleted": id }))
            }
        },
        Commands::Config { action } => run_config(&state.services.config, action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_in() {
        let cli = Cli::parse_from([
            "habit",
            "--user",
            "alice",
            "--today",
            "2025-03-15",
            "check-in",
            "--sleep",
            "7.5",
            "--water",
            "6",
            "--screen-time",
            "2",
        ]);

        assert_eq!(cli.user, "alice");
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2025, 3, 15));
        assert!(matches!(
            cli.command,
            Commands::CheckIn { sleep, water, .. } if sleep == 7.5 && water == 6.0
        ));
    }

    #[test]
    fn test_parse_chart_metric() {
        let cli = Cli::parse_from(["habit", "chart", "--metric", "screen-time"]);
        assert!(matches!(
            cli.command,
            Commands::Chart {
                metric: MetricArg::ScreenTime
            }
        ));
        assert_eq!(cli.user, "default");
    }

    #[test]
    fn test_parse_goal_list_day() {
        let cli = Cli::parse_from(["habit", "goal", "list", "--day", "Thurs"]);
        assert!(matches!(
            cli.command,
            Commands::Goal {
                action: GoalCommands::List {
                    day: Some(DayName::Thurs)
                }
            }
        ));
    }

    #[test]
    fn test_rejects_bad_date() {
        assert!(Cli::try_parse_from(["habit", "--today", "15/03/2025", "streak"]).is_err());
    }

    #[test]
    fn test_rejects_dates_outside_supported_years() {
        assert!(Cli::try_parse_from(["habit", "--today=-262143-01-01", "streak"]).is_err());
        assert!(Cli::try_parse_from(["habit", "--today=+10000-01-01", "chart", "--metric", "sleep"]).is_err());

        let cli = Cli::try_parse_from(["habit", "--today", "0001-01-01", "streak"]).unwrap();
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(1, 1, 1));
    }

    #[tokio::test]
    async fn test_run_rejects_out_of_range_today() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            user: "default".to_string(),
            today: NaiveDate::from_ymd_opt(-262143, 1, 1),
            data_dir: Some(dir.path().to_path_buf()),
            command: Commands::Streak,
        };

        let err = run(cli).await.unwrap_err();
        assert_eq!(err.code, 6002);
        // rejected before the database is opened
        assert!(!dir.path().join(bootstrap::db_filename()).exists());
    }
}
