pub mod settings;

use crate::utils::error::{Result, ScheduleError};
use crate::utils::validation::{parse_iso_date, Validate};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "rest-week")]
#[command(about = "Alternating big/small week rest-day calendar")]
pub struct CliConfig {
    #[arg(long, default_value = ".rest-week", help = "Directory holding the settings file")]
    pub config_dir: String,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a date under the configured schedule
    Check {
        #[arg(long, help = "Date to classify (YYYY-MM-DD), defaults to today")]
        date: Option<String>,
    },
    /// Print a month calendar with rest days marked
    Month {
        #[arg(long, help = "Year to display, defaults to the current year")]
        year: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12),
              help = "Month to display (1-12), defaults to the current month")]
        month: Option<u32>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Validate and persist the reference Monday (start of a double-rest week)
    SetReference {
        /// The Monday starting a double-rest week (YYYY-MM-DD)
        date: String,
    },
    /// Show the effective schedule settings
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.config_dir.is_empty() {
            return Err(ScheduleError::InvalidConfigValueError {
                field: "config_dir".to_string(),
                value: self.config_dir.clone(),
                reason: "Directory cannot be empty".to_string(),
            });
        }

        // Date arguments are re-parsed at dispatch; checking them here keeps
        // all usage errors in one place before any store access.
        match &self.command {
            Command::Check { date: Some(date) } => parse_iso_date("date", date).map(|_| ()),
            Command::SetReference { date } => parse_iso_date("reference", date).map(|_| ()),
            _ => Ok(()),
        }
    }
}
