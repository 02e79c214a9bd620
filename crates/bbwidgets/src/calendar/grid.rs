//! The 6x7 day grid.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::debug;

use super::{CalendarDay, FirstWeekDay, Week};

/// Number of week rows in every grid.
pub const GRID_WEEKS: usize = 6;

/// Number of cells in every grid.
pub const GRID_DAYS: usize = GRID_WEEKS * 7;

/// Returns the date of the grid's top-left cell.
///
/// This is the last `first_week_day` on or before the 1st of the reference
/// month, so it is never later than the 1st and never more than 6 days
/// earlier.
///
/// # Panics
///
/// Panics if the result falls before the earliest date chrono can represent.
/// Use [`checked_first_calendar_date`] for dates that come from user input.
pub fn first_calendar_date(reference: NaiveDate, first_week_day: FirstWeekDay) -> NaiveDate {
    let start = reference - Days::new(u64::from(reference.day0()));
    let shift = first_week_day.offset_of(start.weekday());
    start - Days::new(u64::from(shift))
}

/// Like [`first_calendar_date`], but returns `None` instead of panicking
/// near the start of chrono's date range.
pub fn checked_first_calendar_date(
    reference: NaiveDate,
    first_week_day: FirstWeekDay,
) -> Option<NaiveDate> {
    let start = reference.checked_sub_days(Days::new(u64::from(reference.day0())))?;
    let shift = first_week_day.offset_of(start.weekday());
    start.checked_sub_days(Days::new(u64::from(shift)))
}

/// Like [`build_grid`], but returns `None` when any of the 42 days falls
/// outside chrono's date range.
pub fn try_build_grid(reference: NaiveDate, first_week_day: FirstWeekDay) -> Option<CalendarGrid> {
    let start = checked_first_calendar_date(reference, first_week_day)?;
    start.checked_add_days(Days::new((GRID_DAYS - 1) as u64))?;
    Some(build_grid(reference, first_week_day))
}

/// Builds the 42-day grid around `reference`.
///
/// Days are strictly consecutive from [`first_calendar_date`]. A cell is
/// active when its day of month and month equal the reference date's; a
/// 42-day window cannot hold the same day and month twice, so the year is
/// not compared.
///
/// # Panics
///
/// Panics if the grid would run past the range of dates chrono can
/// represent. [`try_build_grid`] is the non-panicking form.
pub fn build_grid(reference: NaiveDate, first_week_day: FirstWeekDay) -> CalendarGrid {
    let start = first_calendar_date(reference, first_week_day);

    let weeks: [Week; GRID_WEEKS] = std::array::from_fn(|week| {
        std::array::from_fn(|weekday| {
            let date = start + Days::new((week * 7 + weekday) as u64);
            CalendarDay {
                date,
                is_active: date.day() == reference.day() && date.month() == reference.month(),
                is_another_month: date.month() != reference.month(),
            }
        })
    });

    debug!(%reference, %first_week_day, %start, "built calendar grid");

    CalendarGrid {
        reference,
        first_week_day,
        weeks,
    }
}

/// A month view of exactly 6 weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    reference: NaiveDate,
    first_week_day: FirstWeekDay,
    weeks: [Week; GRID_WEEKS],
}

impl CalendarGrid {
    /// The date the grid was built around.
    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// The day each row starts on.
    pub fn first_week_day(&self) -> FirstWeekDay {
        self.first_week_day
    }

    /// The rows, top to bottom.
    pub fn weeks(&self) -> &[Week; GRID_WEEKS] {
        &self.weeks
    }

    /// All 42 cells in reading order.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten()
    }

    /// Date of the top-left cell.
    pub fn first_date(&self) -> NaiveDate {
        self.weeks[0][0].date
    }

    /// Date of the bottom-right cell.
    pub fn last_date(&self) -> NaiveDate {
        self.weeks[GRID_WEEKS - 1][6].date
    }

    /// The highlighted cell.
    pub fn active_day(&self) -> Option<&CalendarDay> {
        self.days().find(|day| day.is_active)
    }

    /// Returns true if `date` is shown in the grid.
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.first_date()..=self.last_date()).contains(&date)
    }
}
