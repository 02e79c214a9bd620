//! Date text formatting and exact-pattern parsing.
//!
//! Patterns use chrono's strftime syntax. The default `%d.%m.%Y` renders
//! 2024-02-15 as `15.02.2024`.

use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Default display pattern for picked dates.
pub const DEFAULT_PATTERN: &str = "%d.%m.%Y";

/// A validated date display pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
}

impl DateFormat {
    /// Validates `pattern` and wraps it.
    ///
    /// The pattern must tokenize cleanly and must identify a whole date, i.e.
    /// a formatted date has to parse back to itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] otherwise.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();

        if pattern.is_empty() {
            return Err(Error::invalid_pattern(pattern, "pattern is empty"));
        }
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(Error::invalid_pattern(pattern, "unrecognized specifier"));
        }

        let format = Self { pattern };
        let sample = NaiveDate::from_ymd_opt(2001, 2, 3)
            .ok_or_else(|| Error::invalid_pattern(&format.pattern, "sample date"))?;

        // Time and offset specifiers fail to render for a bare date.
        let mut rendered = String::new();
        if write!(rendered, "{}", sample.format(&format.pattern)).is_err() {
            return Err(Error::invalid_pattern(
                format.pattern,
                "pattern uses fields a date does not have",
            ));
        }

        match format.parse(&rendered) {
            Ok(parsed) if parsed == sample => Ok(format),
            _ => Err(Error::invalid_pattern(
                format.pattern,
                "pattern does not identify a full date",
            )),
        }
    }

    /// The strftime pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Formats `date` with this pattern.
    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.pattern).to_string()
    }

    /// Parses `text`, which must match the pattern exactly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DateParse`] if the text does not match or names a date
    /// that does not exist.
    pub fn parse(&self, text: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(text, &self.pattern)
            .map_err(|_| Error::date_parse(text, &self.pattern))
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl Serialize for DateFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.pattern)
    }
}

impl<'de> Deserialize<'de> for DateFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let pattern = String::deserialize(deserializer)?;
        DateFormat::new(pattern).map_err(serde::de::Error::custom)
    }
}
