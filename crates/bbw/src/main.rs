use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::load_config;
use commands::{CommandContext, CommandError};
use dispatch::{ConfiguredCommand, ConfiguredDispatch, StandaloneCommand, StandaloneDispatch};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(text) => eprintln!("{text}"),
                    Err(_) => eprintln!("{error_json}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(error_exit_code(&e))
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over `--verbose` and `--quiet`.
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(cli)));

    // A subscriber may already be set when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_log_level(cli: &Cli) -> &'static str {
    if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    // Config, completions and help must work even with a broken config file.
    if let Some(dispatch) = StandaloneDispatch::try_from_cli(cli) {
        let color = load_config().ok().and_then(|config| config.output.color);
        let ctx = CommandContext::from_cli(cli, color);
        debug!(command = ?dispatch, "dispatching standalone command");
        return dispatch.execute(&ctx);
    }

    let config = load_config()?;
    let ctx = CommandContext::from_cli(cli, config.output.color);

    match ConfiguredDispatch::from_cli(cli) {
        Some(dispatch) => {
            debug!(command = ?dispatch, source = ?dispatch.source_path(), "dispatching command");
            dispatch.execute(&ctx, &config)
        }
        None => Ok(()),
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Widget(_) => "WIDGET_ERROR",
        CommandError::Source(_) => "SOURCE_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Prompt(_) => "PROMPT_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> u8 {
    match e {
        CommandError::Widget(_) => 1,
        CommandError::Source(_) => 1,
        CommandError::Json(_) => 1,
        CommandError::Io(_) => 3,
        CommandError::Prompt(_) => 4,
        CommandError::Config(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        assert_eq!(default_log_level(&Cli::parse_from(["bbw", "calendar"])), "warn");
        assert_eq!(
            default_log_level(&Cli::parse_from(["bbw", "-v", "calendar"])),
            "debug"
        );
        assert_eq!(
            default_log_level(&Cli::parse_from(["bbw", "-q", "calendar"])),
            "error"
        );
    }

    #[test]
    fn test_error_codes() {
        let widget: CommandError = bbwidgets::Error::date_parse("x", "%d").into();
        assert_eq!(error_code(&widget), "WIDGET_ERROR");
        assert_eq!(error_exit_code(&widget), 1);

        let source = CommandError::Source("missing".to_string());
        assert_eq!(error_code(&source), "SOURCE_ERROR");
        assert_eq!(error_exit_code(&source), 1);

        let config = CommandError::Config("broken".to_string());
        assert_eq!(error_code(&config), "CONFIG_ERROR");
        assert_eq!(error_exit_code(&config), 5);

        let io = CommandError::Io(std::io::Error::other("disk"));
        assert_eq!(error_code(&io), "IO_ERROR");
        assert_eq!(error_exit_code(&io), 3);

        let prompt = CommandError::Prompt("no tty".to_string());
        assert_eq!(error_code(&prompt), "PROMPT_ERROR");
        assert_eq!(error_exit_code(&prompt), 4);
    }
}
