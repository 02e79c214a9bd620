//! Date command implementation.
//!
//! Drives a [`DatePicker`] from terminal prompts. Each round prints the grid
//! and reads one line: `<` and `>` change the month, a day number picks that
//! day of the shown month, an empty line keeps the current value and anything
//! else is parsed as date text.

use bbwidgets::config::WidgetConfig;
use bbwidgets::date_picker::DatePicker;
use chrono::{Datelike, Local, NaiveDate};
use dialoguer::Input;
use tracing::debug;

use super::calendar::{grid_for, resolve_date, resolve_options};
use super::{ensure_interactive, CommandContext, Result};
use crate::cli::CalendarArgs;
use crate::output::format_calendar_table;

/// A line typed at the date prompt.
#[derive(Debug, PartialEq, Eq)]
enum DateInput {
    Previous,
    Next,
    Keep,
    Day(u32),
    Text(String),
}

impl DateInput {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "" => DateInput::Keep,
            "<" => DateInput::Previous,
            ">" => DateInput::Next,
            _ => match line.parse::<u32>() {
                Ok(day) if line.len() <= 2 => DateInput::Day(day),
                _ => DateInput::Text(line.to_string()),
            },
        }
    }
}

/// Result of feeding one input line to the picker.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// Keep prompting.
    Continue,
    /// A value was committed.
    Done,
    /// The line was rejected; the message says why.
    Rejected(String),
}

fn apply(picker: &mut DatePicker, input: DateInput) -> Outcome {
    match input {
        DateInput::Previous => {
            picker.previous_month();
            Outcome::Continue
        }
        DateInput::Next => {
            picker.next_month();
            Outcome::Continue
        }
        DateInput::Keep => match picker.value() {
            Some(date) => {
                picker.select_day(date);
                Outcome::Done
            }
            None => Outcome::Rejected("no date selected yet".to_string()),
        },
        DateInput::Day(day) => match picker.view_date().and_then(|view| view.with_day(day)) {
            Some(date) => {
                picker.select_day(date);
                Outcome::Done
            }
            None => Outcome::Rejected(format!("day {day} is not in the shown month")),
        },
        DateInput::Text(text) => match picker.text_committed(&text) {
            Ok(_) => {
                picker.close();
                Outcome::Done
            }
            Err(err) => Outcome::Rejected(err.to_string()),
        },
    }
}

/// Executes the date command.
///
/// Prints the picked date in the configured format on stdout.
///
/// # Errors
///
/// Returns an error without a terminal, or if the starting date or
/// `--format` is invalid.
pub fn execute(
    ctx: &CommandContext,
    date: Option<&str>,
    calendar: &CalendarArgs,
    config: &WidgetConfig,
) -> Result<()> {
    ensure_interactive(ctx, "date")?;

    let options = resolve_options(calendar, config)?;
    let today = Local::now().date_naive();
    let start = match date {
        Some(text) => {
            let start = resolve_date(Some(text), &options.format, today)?;
            grid_for(start, options.first_week_day)?;
            Some(start)
        }
        None => None,
    };

    let mut picker = DatePicker::new(options);
    picker.set_value(start);
    picker.on_change(|date: &NaiveDate| debug!(%date, "date changed"));
    picker.toggle_open_at(today);

    while picker.is_open() {
        if let Some(grid) = picker.grid() {
            eprint!(
                "{}",
                format_calendar_table(grid, &picker.options().locale, Some(today), ctx.use_colors)
            );
        }

        let line: String = Input::new()
            .with_prompt(format!("Date [{}] (<, >, day, or text)", picker.text()))
            .allow_empty(true)
            .interact_text()?;

        if let Outcome::Rejected(reason) = apply(&mut picker, DateInput::parse(&line)) {
            if !ctx.quiet {
                eprintln!("{reason}");
            }
        }
    }

    println!("{}", picker.text());
    Ok(())
}
