//! Error types for the fallible edges of the widget cores.
//!
//! Filtering and grid building are total and never return these; errors come
//! from date text parsing, grid range checks, pattern validation, item source
//! mapping and locale configuration.

use chrono::NaiveDate;
use thiserror::Error;

/// A specialized Result type for widget operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the edges of the widget cores.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Text did not match the configured date pattern exactly.
    #[error("'{input}' does not match date format '{pattern}'")]
    DateParse {
        /// The text that failed to parse.
        input: String,
        /// The strftime pattern it was parsed against.
        pattern: String,
    },

    /// The date parsed, but its calendar grid would leave chrono's range.
    #[error("date {date} is outside the supported calendar range")]
    DateOutOfRange {
        /// The rejected date.
        date: NaiveDate,
    },

    /// The date pattern cannot be used to format and parse dates.
    #[error("invalid date format '{pattern}': {reason}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A mapped field holds a value of the wrong JSON type.
    #[error("field '{field}' must be {expected}, found {found}")]
    FieldType {
        /// The field name from the mapping.
        field: String,
        /// Expected JSON type.
        expected: &'static str,
        /// Actual JSON type.
        found: &'static str,
    },

    /// An item source entry is not a JSON object.
    #[error("item source entry {index} is not an object")]
    NotAnObject {
        /// Position of the entry in the source.
        index: usize,
    },

    /// A locale name table has the wrong number of entries.
    #[error("locale {table} needs {expected} names, got {found}")]
    InvalidLocale {
        /// Which table is malformed.
        table: &'static str,
        /// Required entry count.
        expected: usize,
        /// Supplied entry count.
        found: usize,
    },
}

impl Error {
    /// Creates a date parse error.
    pub fn date_parse(input: impl Into<String>, pattern: impl Into<String>) -> Self {
        Error::DateParse {
            input: input.into(),
            pattern: pattern.into(),
        }
    }

    /// Creates an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_parse_display() {
        let err = Error::date_parse("31.02.2024", "%d.%m.%Y");
        assert_eq!(
            err.to_string(),
            "'31.02.2024' does not match date format '%d.%m.%Y'"
        );
    }

    #[test]
    fn test_date_out_of_range_display() {
        let err = Error::DateOutOfRange {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "date 2024-01-01 is outside the supported calendar range"
        );
    }

    #[test]
    fn test_field_type_display() {
        let err = Error::FieldType {
            field: "archived".to_string(),
            expected: "a boolean",
            found: "a string",
        };
        assert_eq!(
            err.to_string(),
            "field 'archived' must be a boolean, found a string"
        );
    }

    #[test]
    fn test_invalid_locale_display() {
        let err = Error::InvalidLocale {
            table: "month_names",
            expected: 12,
            found: 11,
        };
        assert_eq!(err.to_string(), "locale month_names needs 12 names, got 11");
    }
}
