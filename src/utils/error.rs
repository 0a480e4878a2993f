use chrono::{NaiveDate, Weekday};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid date: {0}")]
    DateParseError(#[from] chrono::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Settings write error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    #[error("Settings read error: {0}")]
    TomlDeError(#[from] toml::de::Error),

    #[error("{date} is a {weekday}, not a Monday; pick the Monday that starts a double-rest week")]
    NotAMonday { date: NaiveDate, weekday: Weekday },

    #[error("Configuration error: {field} = '{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
