//! Command implementations for the bbw CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod calendar;
pub mod completions;
pub mod config;
pub mod date;
pub mod filter;
pub mod parse;
pub mod pick;
pub mod source;

use std::io::{self, IsTerminal};

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Widget error (date parsing, patterns, item mapping).
    #[error("{0}")]
    Widget(#[from] bbwidgets::Error),

    /// Item source could not be loaded.
    #[error("item source error: {0}")]
    Source(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Interactive prompt failed or is unavailable.
    #[error("prompt error: {0}")]
    Prompt(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for CommandError {
    fn from(err: dialoguer::Error) -> Self {
        CommandError::Prompt(err.to_string())
    }
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    ///
    /// Colors are on unless `--no-color` is given or the config disables them.
    pub fn from_cli(cli: &Cli, config_color: Option<bool>) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && config_color.unwrap_or(true),
            quiet: cli.quiet,
        }
    }
}

/// Fails unless prompts can be shown on a terminal.
///
/// Interactive commands have no JSON form.
pub fn ensure_interactive(ctx: &CommandContext, command: &str) -> Result<()> {
    if ctx.json_output {
        return Err(CommandError::Prompt(format!(
            "'{command}' is interactive and does not support --json"
        )));
    }
    if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
        return Err(CommandError::Prompt(format!(
            "'{command}' needs an interactive terminal"
        )));
    }
    Ok(())
}
