use crate::utils::error::{Result, ScheduleError};
use chrono::{Datelike, NaiveDate, Weekday};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn parse_iso_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    if value.is_empty() {
        return Err(ScheduleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Date cannot be empty".to_string(),
        });
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        ScheduleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected YYYY-MM-DD: {}", e),
        }
    })
}

/// The reference date must be the Monday that starts a double-rest week.
pub fn ensure_monday(date: NaiveDate) -> Result<()> {
    match date.weekday() {
        Weekday::Mon => Ok(()),
        weekday => Err(ScheduleError::NotAMonday { date, weekday }),
    }
}
