//! Serializable widget settings.
//!
//! These are the parts of a host's configuration file the widgets care
//! about. Every section is optional and falls back to its default.

use serde::{Deserialize, Serialize};

use crate::calendar::FirstWeekDay;
use crate::date_picker::DatePickerOptions;
use crate::format::DateFormat;
use crate::locale::DateLocale;
use crate::source::FieldMapping;

/// Widget settings as stored in a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Date picker settings.
    pub calendar: CalendarConfig,
    /// Month and weekday names; English when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<DateLocale>,
    /// Field names for JSON item sources.
    pub source: FieldMapping,
}

impl WidgetConfig {
    /// Date picker options with the configured locale applied.
    pub fn date_picker_options(&self) -> DatePickerOptions {
        DatePickerOptions {
            locale: self.locale.clone().unwrap_or_default(),
            ..DatePickerOptions::from(&self.calendar)
        }
    }
}

/// Date picker settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Day each grid row starts on.
    pub first_week_day: FirstWeekDay,
    /// Display and parse pattern.
    pub date_format: DateFormat,
}
