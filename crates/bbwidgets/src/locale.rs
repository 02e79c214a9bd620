//! Month and weekday names handed to the date picker explicitly.
//!
//! Nothing here reads process-wide culture settings; hosts build a
//! [`DateLocale`] once (or load it from config) and pass it in.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::FirstWeekDay;
use crate::error::{Error, Result};

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ENGLISH_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Names used for the picker header and weekday row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLocale", into = "RawLocale")]
pub struct DateLocale {
    month_names: [String; 12],
    abbreviated_day_names: [String; 7],
}

impl DateLocale {
    /// Builds a locale from full month names (January first) and abbreviated
    /// day names (Sunday first).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLocale`] when a table has the wrong length.
    pub fn new(month_names: Vec<String>, abbreviated_day_names: Vec<String>) -> Result<Self> {
        let month_names: [String; 12] =
            month_names
                .try_into()
                .map_err(|names: Vec<String>| Error::InvalidLocale {
                    table: "month_names",
                    expected: 12,
                    found: names.len(),
                })?;
        let abbreviated_day_names: [String; 7] =
            abbreviated_day_names
                .try_into()
                .map_err(|names: Vec<String>| Error::InvalidLocale {
                    table: "abbreviated_day_names",
                    expected: 7,
                    found: names.len(),
                })?;

        Ok(Self {
            month_names,
            abbreviated_day_names,
        })
    }

    /// Full name of `date`'s month.
    pub fn month_name(&self, date: NaiveDate) -> &str {
        &self.month_names[date.month0() as usize]
    }

    /// Header text such as `February 2024`.
    pub fn month_title(&self, date: NaiveDate) -> String {
        format!("{} {}", self.month_name(date), date.year())
    }

    /// Abbreviated name of `date`'s weekday.
    pub fn day_name(&self, date: NaiveDate) -> &str {
        &self.abbreviated_day_names[date.weekday().num_days_from_sunday() as usize]
    }

    /// Weekday header in grid column order.
    pub fn day_names(&self, first_week_day: FirstWeekDay) -> [&str; 7] {
        let sunday_first: [&str; 7] =
            std::array::from_fn(|i| self.abbreviated_day_names[i].as_str());
        first_week_day.rotate(&sunday_first)
    }
}

impl Default for DateLocale {
    fn default() -> Self {
        Self {
            month_names: ENGLISH_MONTHS.map(String::from),
            abbreviated_day_names: ENGLISH_DAYS.map(String::from),
        }
    }
}

/// Serde shape of [`DateLocale`]; lengths are checked on conversion.
#[derive(Serialize, Deserialize)]
struct RawLocale {
    month_names: Vec<String>,
    abbreviated_day_names: Vec<String>,
}

impl TryFrom<RawLocale> for DateLocale {
    type Error = Error;

    fn try_from(raw: RawLocale) -> Result<Self> {
        DateLocale::new(raw.month_names, raw.abbreviated_day_names)
    }
}

impl From<DateLocale> for RawLocale {
    fn from(locale: DateLocale) -> Self {
        Self {
            month_names: locale.month_names.into(),
            abbreviated_day_names: locale.abbreviated_day_names.into(),
        }
    }
}
