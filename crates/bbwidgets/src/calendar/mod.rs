//! Calendar grid generation for the date picker.
//!
//! A grid always has 6 weeks of 7 days (42 cells), whatever the month length,
//! so the picker's layout never changes height. The first cell is the
//! configured first week day on or before the 1st of the reference month.
//!
//! # Example
//!
//! ```
//! use bbwidgets::calendar::{build_grid, first_calendar_date, FirstWeekDay};
//! use chrono::NaiveDate;
//!
//! let reference = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
//! assert_eq!(
//!     first_calendar_date(reference, FirstWeekDay::Monday),
//!     NaiveDate::from_ymd_opt(2024, 1, 29).unwrap()
//! );
//!
//! let grid = build_grid(reference, FirstWeekDay::Monday);
//! assert_eq!(grid.last_date(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
//! assert_eq!(grid.active_day().map(|d| d.date), Some(reference));
//! ```

mod grid;

pub use grid::{
    build_grid, checked_first_calendar_date, first_calendar_date, try_build_grid, CalendarGrid,
    GRID_DAYS, GRID_WEEKS,
};

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Which day a calendar week starts on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstWeekDay {
    /// Weeks run Sunday to Saturday.
    #[default]
    Sunday,
    /// Weeks run Monday to Sunday.
    Monday,
}

impl FirstWeekDay {
    /// The chrono weekday every grid row starts on.
    pub fn weekday(self) -> Weekday {
        match self {
            FirstWeekDay::Sunday => Weekday::Sun,
            FirstWeekDay::Monday => Weekday::Mon,
        }
    }

    /// Number of days between the row start and `day`.
    pub fn offset_of(self, day: Weekday) -> u32 {
        match self {
            FirstWeekDay::Sunday => day.num_days_from_sunday(),
            FirstWeekDay::Monday => day.num_days_from_monday(),
        }
    }

    /// Reorders a Sunday-first table so it starts on this day.
    pub fn rotate<T: Clone>(self, sunday_first: &[T; 7]) -> [T; 7] {
        let start = match self {
            FirstWeekDay::Sunday => 0,
            FirstWeekDay::Monday => 1,
        };
        std::array::from_fn(|i| sunday_first[(i + start) % 7].clone())
    }
}

impl fmt::Display for FirstWeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FirstWeekDay::Sunday => f.write_str("sunday"),
            FirstWeekDay::Monday => f.write_str("monday"),
        }
    }
}

/// Error returned when a first week day name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown first week day '{0}' (expected sunday or monday)")]
pub struct ParseFirstWeekDayError(String);

impl FromStr for FirstWeekDay {
    type Err = ParseFirstWeekDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" => Ok(FirstWeekDay::Sunday),
            "monday" | "mon" => Ok(FirstWeekDay::Monday),
            _ => Err(ParseFirstWeekDayError(s.to_string())),
        }
    }
}

/// One cell of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    /// The date shown in the cell.
    pub date: NaiveDate,
    /// Same day of month and month as the reference date.
    pub is_active: bool,
    /// Falls outside the reference month.
    pub is_another_month: bool,
}

/// Seven consecutive days starting on the configured first week day.
pub type Week = [CalendarDay; 7];
