pub mod presenter;
pub mod schedule;

pub use crate::domain::model::{DayCell, MonthGrid, RestDay, WeekParity, WeekType};
pub use crate::domain::ports::SettingsStore;
pub use crate::utils::error::Result;
