//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the bbw CLI.

use std::path::PathBuf;

use bbwidgets::calendar::FirstWeekDay;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// bbw - Filter item lists and pick dates from the terminal
#[derive(Parser, Debug)]
#[command(name = "bbw")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter an item source with a search query
    #[command(alias = "f")]
    Filter {
        /// Search query; every space-separated token must appear in the label
        query: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Limit results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print the calendar grid around a date
    #[command(alias = "cal")]
    Calendar {
        /// Reference date in the configured format (default: today)
        date: Option<String>,

        #[command(flatten)]
        calendar: CalendarArgs,
    },

    /// Parse date text with the configured pattern
    Parse {
        /// Text to parse
        text: String,

        /// Date pattern (strftime syntax)
        #[arg(long)]
        format: Option<String>,
    },

    /// Interactively pick an item from a source
    Pick {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Interactively pick a date
    Date {
        /// Starting date in the configured format (default: unset)
        date: Option<String>,

        #[command(flatten)]
        calendar: CalendarArgs,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where items come from and how to read them.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// JSON file holding an array of objects ("-" for stdin)
    #[arg(short, long)]
    pub source: PathBuf,

    /// Field holding the item label
    #[arg(long)]
    pub text_field: Option<String>,

    /// Field holding the item value
    #[arg(long)]
    pub value_field: Option<String>,

    /// Field holding the soft-delete flag
    #[arg(long)]
    pub deleted_field: Option<String>,

    /// Offer soft-deleted items too
    #[arg(long)]
    pub include_deleted: bool,
}

/// Calendar display options.
#[derive(Args, Debug, Clone, Default)]
pub struct CalendarArgs {
    /// Day weeks start on (sunday or monday)
    #[arg(long)]
    pub first_week_day: Option<FirstWeekDay>,

    /// Date pattern (strftime syntax)
    #[arg(long)]
    pub format: Option<String>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Open config in editor
    Edit,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}

/// Supported shells for completions
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}
