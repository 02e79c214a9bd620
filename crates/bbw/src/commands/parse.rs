//! Parse command implementation.

use bbwidgets::config::WidgetConfig;
use bbwidgets::format::DateFormat;
use chrono::NaiveDate;
use tracing::debug;

use super::{CommandContext, Result};
use crate::output::{format_parsed_json, format_parsed_table};

/// Parses `text` with `pattern`, falling back to the configured pattern.
///
/// # Errors
///
/// Returns an error if the pattern is invalid or the text does not match it.
pub fn parse_date(
    text: &str,
    pattern: Option<&str>,
    config: &WidgetConfig,
) -> Result<(DateFormat, NaiveDate)> {
    let format = match pattern {
        Some(pattern) => DateFormat::new(pattern)?,
        None => config.calendar.date_format.clone(),
    };
    let date = format.parse(text)?;
    Ok((format, date))
}

/// Executes the parse command.
///
/// # Errors
///
/// Returns an error if the text cannot be parsed.
pub fn execute(
    ctx: &CommandContext,
    text: &str,
    pattern: Option<&str>,
    config: &WidgetConfig,
) -> Result<()> {
    let (format, date) = parse_date(text, pattern, config)?;
    debug!(input = text, pattern = format.pattern(), %date, "parsed date");

    let locale = config.locale.clone().unwrap_or_default();
    if ctx.json_output {
        println!("{}", format_parsed_json(text, &format, &locale, date)?);
    } else {
        print!("{}", format_parsed_table(date, &locale, ctx.use_colors));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandError;

    #[test]
    fn test_parse_with_default_pattern() {
        let (format, date) = parse_date("29.02.2024", None, &WidgetConfig::default()).unwrap();
        assert_eq!(format.pattern(), "%d.%m.%Y");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_with_explicit_pattern() {
        let (_, date) =
            parse_date("2024-02-29", Some("%Y-%m-%d"), &WidgetConfig::default()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_rejects_nonexistent_date() {
        let err = parse_date("29.02.2023", None, &WidgetConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Widget(bbwidgets::Error::DateParse { .. })
        ));
        assert_eq!(
            err.to_string(),
            "'29.02.2023' does not match date format '%d.%m.%Y'"
        );
    }

    #[test]
    fn test_parse_rejects_bad_pattern() {
        assert!(matches!(
            parse_date("2024", Some("%Y"), &WidgetConfig::default()),
            Err(CommandError::Widget(bbwidgets::Error::InvalidPattern { .. }))
        ));
    }
}
