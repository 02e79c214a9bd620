//! Calendar grid and date output formatting.

use bbwidgets::calendar::{CalendarDay, CalendarGrid, FirstWeekDay, Week, GRID_WEEKS};
use bbwidgets::format::DateFormat;
use bbwidgets::locale::DateLocale;
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Width of one rendered grid row.
const ROW_WIDTH: usize = 28;

/// JSON output structure for a calendar grid.
#[derive(Serialize)]
pub struct CalendarOutput<'a> {
    pub title: String,
    pub reference: NaiveDate,
    pub text: String,
    pub first_week_day: FirstWeekDay,
    pub day_names: [&'a str; 7],
    pub weeks: &'a [Week; GRID_WEEKS],
}

/// JSON output structure for a parsed date.
#[derive(Serialize)]
pub struct ParsedDateOutput<'a> {
    pub input: &'a str,
    pub pattern: &'a str,
    pub date: NaiveDate,
    pub text: String,
    pub weekday: &'a str,
}

/// Formats a calendar grid as JSON.
pub fn format_calendar_json(
    grid: &CalendarGrid,
    locale: &DateLocale,
    format: &DateFormat,
) -> Result<String, serde_json::Error> {
    let output = CalendarOutput {
        title: locale.month_title(grid.reference()),
        reference: grid.reference(),
        text: format.format(grid.reference()),
        first_week_day: grid.first_week_day(),
        day_names: locale.day_names(grid.first_week_day()),
        weeks: grid.weeks(),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats a calendar grid as a month table.
///
/// The active day is bracketed and `today` carries a trailing `*`. With
/// colors on, days from neighbouring months are dimmed.
pub fn format_calendar_table(
    grid: &CalendarGrid,
    locale: &DateLocale,
    today: Option<NaiveDate>,
    use_colors: bool,
) -> String {
    let mut output = String::new();

    let title = format!("{:^width$}", locale.month_title(grid.reference()), width = ROW_WIDTH);
    if use_colors {
        output.push_str(&format!("{}\n", title.trim_end().bold()));
    } else {
        output.push_str(title.trim_end());
        output.push('\n');
    }

    let header: String = locale
        .day_names(grid.first_week_day())
        .iter()
        .map(|name| {
            let short: String = name.chars().take(2).collect();
            format!(" {:>2} ", short)
        })
        .collect();
    if use_colors {
        output.push_str(&format!("{}\n", header.trim_end().dimmed()));
    } else {
        output.push_str(header.trim_end());
        output.push('\n');
    }

    for week in grid.weeks() {
        let row: String = week
            .iter()
            .map(|day| format_cell(day, today, use_colors))
            .collect();
        output.push_str(row.trim_end());
        output.push('\n');
    }

    output
}

fn format_cell(day: &CalendarDay, today: Option<NaiveDate>, use_colors: bool) -> String {
    let number = day.date.day();
    let is_today = today == Some(day.date);
    let cell = if day.is_active {
        format!("[{:>2}]", number)
    } else if is_today {
        format!(" {:>2}*", number)
    } else {
        format!(" {:>2} ", number)
    };

    if !use_colors {
        return cell;
    }
    if day.is_active {
        cell.reversed().to_string()
    } else if is_today {
        cell.underline().to_string()
    } else if day.is_another_month {
        cell.dimmed().to_string()
    } else {
        cell
    }
}

/// Formats a successfully parsed date as JSON.
pub fn format_parsed_json(
    input: &str,
    format: &DateFormat,
    locale: &DateLocale,
    date: NaiveDate,
) -> Result<String, serde_json::Error> {
    let output = ParsedDateOutput {
        input,
        pattern: format.pattern(),
        date,
        text: format.format(date),
        weekday: locale.day_name(date),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats a successfully parsed date for the terminal.
pub fn format_parsed_table(date: NaiveDate, locale: &DateLocale, use_colors: bool) -> String {
    let iso = date.to_string();
    let weekday = locale.day_name(date);
    if use_colors {
        format!("{} ({})\n", iso.green(), weekday)
    } else {
        format!("{iso} ({weekday})\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbwidgets::calendar::build_grid;
    use serde_json::Value;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calendar_table_sunday_first() {
        let grid = build_grid(date(2024, 2, 15), FirstWeekDay::Sunday);
        let table = format_calendar_table(&grid, &DateLocale::default(), None, false);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0].trim(), "February 2024");
        assert_eq!(lines[1], " Su  Mo  Tu  We  Th  Fr  Sa");
        assert_eq!(lines[2], " 28  29  30  31   1   2   3");
        assert_eq!(lines[4], " 11  12  13  14 [15] 16  17");
        assert_eq!(lines[7], "  3   4   5   6   7   8   9");
    }

    #[test]
    fn test_calendar_table_monday_first_marks_today() {
        let grid = build_grid(date(2024, 2, 15), FirstWeekDay::Monday);
        let table = format_calendar_table(
            &grid,
            &DateLocale::default(),
            Some(date(2024, 2, 20)),
            false,
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[1], " Mo  Tu  We  Th  Fr  Sa  Su");
        assert_eq!(lines[2], " 29  30  31   1   2   3   4");
        assert_eq!(lines[4], " 12  13  14 [15] 16  17  18");
        assert_eq!(lines[5], " 19  20* 21  22  23  24  25");
    }

    #[test]
    fn test_calendar_json() {
        let grid = build_grid(date(2024, 2, 15), FirstWeekDay::Monday);
        let json =
            format_calendar_json(&grid, &DateLocale::default(), &DateFormat::default()).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["title"], "February 2024");
        assert_eq!(parsed["reference"], "2024-02-15");
        assert_eq!(parsed["text"], "15.02.2024");
        assert_eq!(parsed["first_week_day"], "monday");
        assert_eq!(parsed["day_names"][0], "Mon");
        assert_eq!(parsed["weeks"].as_array().unwrap().len(), 6);
        assert_eq!(parsed["weeks"][0][0]["date"], "2024-01-29");
        assert_eq!(parsed["weeks"][0][0]["is_another_month"], true);
        assert_eq!(parsed["weeks"][2][3]["is_active"], true);
    }

    #[test]
    fn test_parsed_date_output() {
        let format = DateFormat::default();
        let locale = DateLocale::default();
        let json = format_parsed_json("15.02.2024", &format, &locale, date(2024, 2, 15)).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["date"], "2024-02-15");
        assert_eq!(parsed["pattern"], "%d.%m.%Y");
        assert_eq!(parsed["weekday"], "Thu");

        assert_eq!(
            format_parsed_table(date(2024, 2, 15), &locale, false),
            "2024-02-15 (Thu)\n"
        );
    }

    #[test]
    fn test_parsed_date_uses_locale_day_name() {
        let months: Vec<String> = (1..=12).map(|m| format!("m{m}")).collect();
        let days = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"];
        let locale =
            DateLocale::new(months, days.iter().map(|d| d.to_string()).collect()).unwrap();

        let json =
            format_parsed_json("15.02.2024", &DateFormat::default(), &locale, date(2024, 2, 15))
                .unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["weekday"], "Do");
        assert_eq!(
            format_parsed_table(date(2024, 2, 18), &locale, false),
            "2024-02-18 (So)\n"
        );
    }
}
