//! Headless calendar date picker.
//!
//! ```text
//! Closed --toggle_open--> Open --select_day | close--> Closed
//!                         Open --previous_month | next_month--> Open
//! ```
//!
//! The picker keeps two dates: the committed `value`, reported to change
//! subscribers, and the `view` date the grid is built around. Month
//! navigation moves only the view. An unset value is `None`; no grid exists
//! until a date is known.

use chrono::{Local, Months, NaiveDate};
use tracing::debug;

use crate::calendar::{try_build_grid, CalendarGrid, FirstWeekDay};
use crate::config::CalendarConfig;
use crate::error::{Error, Result};
use crate::format::DateFormat;
use crate::locale::DateLocale;
use crate::notify::{ChangeSubscribers, SubscriptionId};

/// Construction options for [`DatePicker`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatePickerOptions {
    /// Day each grid row starts on.
    pub first_week_day: FirstWeekDay,
    /// Display and parse pattern for the text input.
    pub format: DateFormat,
    /// Month and weekday names.
    pub locale: DateLocale,
}

impl From<&CalendarConfig> for DatePickerOptions {
    fn from(config: &CalendarConfig) -> Self {
        Self {
            first_week_day: config.first_week_day,
            format: config.date_format.clone(),
            locale: DateLocale::default(),
        }
    }
}

/// Date picker state machine.
#[derive(Debug)]
pub struct DatePicker {
    options: DatePickerOptions,
    value: Option<NaiveDate>,
    view: Option<NaiveDate>,
    text: String,
    is_open: bool,
    grid: Option<CalendarGrid>,
    subscribers: ChangeSubscribers<NaiveDate>,
}

impl DatePicker {
    /// Creates a closed picker with no value.
    pub fn new(options: DatePickerOptions) -> Self {
        Self {
            options,
            value: None,
            view: None,
            text: String::new(),
            is_open: false,
            grid: None,
            subscribers: ChangeSubscribers::new(),
        }
    }

    /// Registers a change callback.
    pub fn on_change<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&NaiveDate) + Send + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Removes a change callback.
    pub fn remove_on_change(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Sets the value from the host without notifying.
    ///
    /// A date too close to the ends of chrono's range leaves the picker
    /// without a grid.
    pub fn set_value(&mut self, value: Option<NaiveDate>) {
        self.value = value;
        self.view = value;
        self.sync_text();
        self.rebuild();
    }

    /// Changes the first week day and rebuilds the grid.
    pub fn set_first_week_day(&mut self, first_week_day: FirstWeekDay) {
        self.options.first_week_day = first_week_day;
        self.rebuild();
    }

    /// The committed value.
    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    /// The date the grid is currently built around.
    pub fn view_date(&self) -> Option<NaiveDate> {
        self.view
    }

    /// The text shown in the input.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the calendar dropdown is showing.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The current grid, if a date is known.
    pub fn grid(&self) -> Option<&CalendarGrid> {
        self.grid.as_ref()
    }

    /// The construction options.
    pub fn options(&self) -> &DatePickerOptions {
        &self.options
    }

    /// Header text for the viewed month.
    pub fn month_title(&self) -> Option<String> {
        self.view.map(|date| self.options.locale.month_title(date))
    }

    /// Weekday header in grid column order.
    pub fn day_names(&self) -> [&str; 7] {
        self.options.locale.day_names(self.options.first_week_day)
    }

    /// Toggles the dropdown using the local clock for an unset value.
    pub fn toggle_open(&mut self) {
        self.toggle_open_at(Local::now().date_naive());
    }

    /// Toggles the dropdown. An unset value becomes `today` without
    /// notifying subscribers.
    pub fn toggle_open_at(&mut self, today: NaiveDate) {
        if self.value.is_none() {
            self.value = Some(today);
            self.sync_text();
        }
        // Reopening starts from the committed value again.
        self.view = self.value;
        self.is_open = !self.is_open;
        self.rebuild();
    }

    /// Closes the dropdown, e.g. on a click outside the widget.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Shows the previous month.
    pub fn previous_month(&mut self) {
        self.shift_view(|date| date.checked_sub_months(Months::new(1)));
    }

    /// Shows the next month.
    pub fn next_month(&mut self) {
        self.shift_view(|date| date.checked_add_months(Months::new(1)));
    }

    /// Commits `date` as the value, notifies and closes.
    pub fn select_day(&mut self, date: NaiveDate) {
        self.value = Some(date);
        self.view = Some(date);
        self.sync_text();
        self.rebuild();
        self.is_open = false;
        debug!(%date, "date picker selection");
        self.subscribers.emit(&date);
    }

    /// The input committed its text.
    ///
    /// Text matching the pattern becomes the new value. Anything else puts
    /// the last valid text back and leaves the value untouched.
    ///
    /// # Errors
    ///
    /// Returns the parse error after reverting, or [`Error::DateOutOfRange`]
    /// for a date whose grid cannot be built.
    pub fn text_committed(&mut self, text: &str) -> Result<NaiveDate> {
        let parsed = self.options.format.parse(text).and_then(|date| {
            match try_build_grid(date, self.options.first_week_day) {
                Some(_) => Ok(date),
                None => Err(Error::DateOutOfRange { date }),
            }
        });

        match parsed {
            Ok(date) => {
                self.value = Some(date);
                self.view = Some(date);
                self.sync_text();
                self.rebuild();
                debug!(%date, "date picker text accepted");
                self.subscribers.emit(&date);
                Ok(date)
            }
            Err(err) => {
                self.sync_text();
                debug!(input = text, "date picker text rejected");
                Err(err)
            }
        }
    }

    fn shift_view(&mut self, shift: impl FnOnce(NaiveDate) -> Option<NaiveDate>) {
        let first_week_day = self.options.first_week_day;
        let shifted = self
            .view
            .and_then(shift)
            .filter(|date| try_build_grid(*date, first_week_day).is_some());
        if let Some(shifted) = shifted {
            self.view = Some(shifted);
            self.rebuild();
        }
    }

    fn sync_text(&mut self) {
        self.text = self
            .value
            .map(|date| self.options.format.format(date))
            .unwrap_or_default();
    }

    fn rebuild(&mut self) {
        self.grid = self
            .view
            .and_then(|date| try_build_grid(date, self.options.first_week_day));
    }
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new(DatePickerOptions::default())
    }
}
