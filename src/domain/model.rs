use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Week parity relative to the reference Monday: 0 = double-rest week,
/// 1 = single-rest week.
pub type WeekParity = u8;

/// Classification of a single calendar date under the alternating schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestDay {
    WorkDay,
    SingleRest,
    DoubleRest,
}

impl RestDay {
    pub fn is_rest(&self) -> bool {
        !matches!(self, RestDay::WorkDay)
    }
}

impl fmt::Display for RestDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RestDay::WorkDay => "workday",
            RestDay::SingleRest => "single-rest day",
            RestDay::DoubleRest => "double-rest day",
        };
        f.write_str(s)
    }
}

/// Which kind of week a date falls in. The reference week is always
/// `DoubleRest`; weeks alternate from there in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekType {
    DoubleRest,
    SingleRest,
}

impl WeekType {
    pub fn label(&self) -> &'static str {
        match self {
            WeekType::DoubleRest => "double-rest week (Sat+Sun off)",
            WeekType::SingleRest => "single-rest week (Sun off)",
        }
    }
}

impl fmt::Display for WeekType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One cell of a rendered month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for the leading/trailing padding days of adjacent months.
    pub in_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub classification: RestDay,
}

/// A 6x7 Monday-first month grid of classified cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    pub const WEEKS: usize = 6;
    pub const DAYS_PER_WEEK: usize = 7;

    /// Iterate the grid one Monday-first week at a time.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(Self::DAYS_PER_WEEK)
    }
}
