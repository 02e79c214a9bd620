//! Calendar command implementation.
//!
//! Prints the six-week grid around a date.

use bbwidgets::calendar::{try_build_grid, CalendarGrid, FirstWeekDay};
use bbwidgets::config::WidgetConfig;
use bbwidgets::date_picker::DatePickerOptions;
use bbwidgets::format::DateFormat;
use chrono::{Local, NaiveDate};
use tracing::debug;

use super::{CommandContext, Result};
use crate::cli::CalendarArgs;
use crate::output::{format_calendar_json, format_calendar_table};

/// Options for the calendar command.
#[derive(Debug)]
pub struct CalendarOptions<'a> {
    /// Reference date text, today when absent.
    pub date: Option<&'a str>,
    /// Display overrides.
    pub calendar: &'a CalendarArgs,
}

/// Builds picker options from the config with command-line overrides applied.
///
/// # Errors
///
/// Returns an error if `--format` is not a usable date pattern.
pub fn resolve_options(args: &CalendarArgs, config: &WidgetConfig) -> Result<DatePickerOptions> {
    let mut options = config.date_picker_options();
    if let Some(first_week_day) = args.first_week_day {
        options.first_week_day = first_week_day;
    }
    if let Some(ref pattern) = args.format {
        options.format = DateFormat::new(pattern.as_str())?;
    }
    Ok(options)
}

/// Parses `text` with the picker format, or returns `today` when absent.
pub fn resolve_date(
    text: Option<&str>,
    format: &DateFormat,
    today: NaiveDate,
) -> Result<NaiveDate> {
    match text {
        Some(text) => Ok(format.parse(text)?),
        None => Ok(today),
    }
}

/// Builds the grid around `reference`, rejecting dates at the ends of the
/// supported range.
///
/// # Errors
///
/// Returns a widget error if the grid would leave chrono's date range.
pub fn grid_for(reference: NaiveDate, first_week_day: FirstWeekDay) -> Result<CalendarGrid> {
    try_build_grid(reference, first_week_day)
        .ok_or_else(|| bbwidgets::Error::DateOutOfRange { date: reference }.into())
}

/// Executes the calendar command.
///
/// # Errors
///
/// Returns an error if the date or pattern cannot be parsed.
pub fn execute(ctx: &CommandContext, opts: &CalendarOptions, config: &WidgetConfig) -> Result<()> {
    let options = resolve_options(opts.calendar, config)?;
    let today = Local::now().date_naive();
    let reference = resolve_date(opts.date, &options.format, today)?;

    debug!(%reference, first_week_day = %options.first_week_day, "building calendar");
    let grid = grid_for(reference, options.first_week_day)?;

    if ctx.json_output {
        let output = format_calendar_json(&grid, &options.locale, &options.format)?;
        println!("{output}");
    } else {
        print!(
            "{}",
            format_calendar_table(&grid, &options.locale, Some(today), ctx.use_colors)
        );
    }

    Ok(())
}
