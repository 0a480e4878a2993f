//! Calendar view state and month-grid construction.
//!
//! The presenter owns the two pieces of view state (visible month, selected
//! date) explicitly; the grid itself is recomputed from scratch on every
//! call, a pure function of (month, reference, today, selected).

use crate::core::schedule::{classify, monday_of};
use crate::domain::model::{DayCell, MonthGrid};
use chrono::{Datelike, Days, Months, NaiveDate};

/// View state for the month calendar: which month is visible and which day
/// is selected.
#[derive(Debug, Clone)]
pub struct CalendarPresenter {
    /// First day of the visible month.
    visible: NaiveDate,
    selected: NaiveDate,
}

impl CalendarPresenter {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            visible: first_of_month(today),
            selected: today,
        }
    }

    pub fn visible_year(&self) -> i32 {
        self.visible.year()
    }

    pub fn visible_month(&self) -> u32 {
        self.visible.month()
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// Show a specific month. `day` may be any date in that month.
    pub fn show_month(&mut self, day: NaiveDate) {
        self.visible = first_of_month(day);
    }

    pub fn prev_month(&mut self) {
        self.visible = self.visible - Months::new(1);
    }

    pub fn next_month(&mut self) {
        self.visible = self.visible + Months::new(1);
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
    }

    /// Build the grid for the visible month under the given reference.
    pub fn grid(&self, reference_monday: NaiveDate, today: NaiveDate) -> MonthGrid {
        build_month_grid(self.visible, reference_monday, today, Some(self.selected))
    }
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day - Days::new(u64::from(day.day() - 1))
}

/// Build a 6x7 Monday-first grid for the month containing `first_of_month`,
/// padded with leading/trailing days of the adjacent months.
pub fn build_month_grid(
    first_of_month: NaiveDate,
    reference_monday: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> MonthGrid {
    let start = monday_of(first_of_month);
    let total = MonthGrid::WEEKS * MonthGrid::DAYS_PER_WEEK;

    let cells = (0..total as u64)
        .map(|offset| {
            let date = start + Days::new(offset);
            DayCell {
                date,
                in_month: date.year() == first_of_month.year()
                    && date.month() == first_of_month.month(),
                is_today: date == today,
                is_selected: selected == Some(date),
                classification: classify(date, reference_monday),
            }
        })
        .collect();

    MonthGrid {
        year: first_of_month.year(),
        month: first_of_month.month(),
        cells,
    }
}
