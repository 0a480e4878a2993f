pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::settings::{FileSettingsStore, ScheduleSettings};
pub use config::{CliConfig, Command, OutputFormat};
pub use core::presenter::{build_month_grid, CalendarPresenter};
pub use core::schedule::{classify, monday_of, week_parity, week_type};
pub use domain::model::{DayCell, MonthGrid, RestDay, WeekParity, WeekType};
pub use domain::ports::SettingsStore;
pub use utils::error::{Result, ScheduleError};
