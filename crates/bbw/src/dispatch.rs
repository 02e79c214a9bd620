//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands split into two groups: those that manage the tool itself and run
//! without a loaded configuration, and widget commands that need the
//! configured calendar, locale and source settings.

use std::path::Path;

use crate::cli::{CalendarArgs, Cli, Commands, ConfigCommands, Shell, SourceArgs};
use crate::commands::calendar::CalendarOptions;
use crate::commands::config::Config;
use crate::commands::filter::FilterOptions;
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that run without a loaded configuration.
pub trait StandaloneCommand {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that read the configuration.
pub trait ConfiguredCommand {
    /// Execute the command with the loaded configuration.
    fn execute(&self, ctx: &CommandContext, config: &Config) -> Result<()>;
}

/// Commands that don't need the configuration loaded.
#[derive(Debug)]
pub enum StandaloneDispatch<'a> {
    Config(&'a Option<ConfigCommands>),
    Completions(Shell),
    Help,
}

impl<'a> StandaloneDispatch<'a> {
    /// Try to create a standalone dispatch from the CLI command.
    /// Returns None if the command needs the configuration.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(*shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl StandaloneCommand for StandaloneDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(*shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("bbw - filter item lists and pick dates");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
        Some(ConfigCommands::Edit) => commands::config::execute_edit(ctx),
    }
}

/// Commands that need the configuration.
#[derive(Debug)]
pub enum ConfiguredDispatch<'a> {
    Filter {
        query: &'a str,
        source: &'a SourceArgs,
        limit: Option<usize>,
    },
    Calendar {
        date: Option<&'a str>,
        calendar: &'a CalendarArgs,
    },
    Parse {
        text: &'a str,
        format: Option<&'a str>,
    },
    Pick {
        source: &'a SourceArgs,
    },
    Date {
        date: Option<&'a str>,
        calendar: &'a CalendarArgs,
    },
}

impl<'a> ConfiguredDispatch<'a> {
    /// Create a configured dispatch from the CLI command.
    /// Returns None if the command is standalone.
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Filter {
                query,
                source,
                limit,
            }) => Some(Self::Filter {
                query,
                source,
                limit: *limit,
            }),
            Some(Commands::Calendar { date, calendar }) => Some(Self::Calendar {
                date: date.as_deref(),
                calendar,
            }),
            Some(Commands::Parse { text, format }) => Some(Self::Parse {
                text,
                format: format.as_deref(),
            }),
            Some(Commands::Pick { source }) => Some(Self::Pick { source }),
            Some(Commands::Date { date, calendar }) => Some(Self::Date {
                date: date.as_deref(),
                calendar,
            }),
            _ => None,
        }
    }

    /// The item source this command reads, if any.
    pub fn source_path(&self) -> Option<&Path> {
        match self {
            Self::Filter { source, .. } | Self::Pick { source } => Some(&source.source),
            _ => None,
        }
    }
}

impl ConfiguredCommand for ConfiguredDispatch<'_> {
    fn execute(&self, ctx: &CommandContext, config: &Config) -> Result<()> {
        let widgets = config.widgets();
        match self {
            Self::Filter {
                query,
                source,
                limit,
            } => {
                let opts = FilterOptions {
                    query,
                    source,
                    limit: *limit,
                };
                commands::filter::execute(ctx, &opts, &widgets.source)
            }
            Self::Calendar { date, calendar } => {
                let opts = CalendarOptions {
                    date: *date,
                    calendar,
                };
                commands::calendar::execute(ctx, &opts, &widgets)
            }
            Self::Parse { text, format } => commands::parse::execute(ctx, text, *format, &widgets),
            Self::Pick { source } => commands::pick::execute(ctx, source, &widgets.source),
            Self::Date { date, calendar } => {
                commands::date::execute(ctx, *date, calendar, &widgets)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_standalone_commands() {
        let cli = Cli::parse_from(["bbw", "config", "path"]);
        assert!(matches!(
            StandaloneDispatch::try_from_cli(&cli),
            Some(StandaloneDispatch::Config(Some(ConfigCommands::Path)))
        ));

        let cli = Cli::parse_from(["bbw", "completions", "fish"]);
        assert!(matches!(
            StandaloneDispatch::try_from_cli(&cli),
            Some(StandaloneDispatch::Completions(Shell::Fish))
        ));

        let cli = Cli::parse_from(["bbw"]);
        assert!(matches!(
            StandaloneDispatch::try_from_cli(&cli),
            Some(StandaloneDispatch::Help)
        ));
        assert!(ConfiguredDispatch::from_cli(&cli).is_none());
    }

    #[test]
    fn test_configured_commands() {
        let cli = Cli::parse_from(["bbw", "filter", "ab", "-s", "items.json", "--limit", "3"]);
        assert!(StandaloneDispatch::try_from_cli(&cli).is_none());
        let dispatch = ConfiguredDispatch::from_cli(&cli).unwrap();
        assert_eq!(dispatch.source_path(), Some(Path::new("items.json")));
        assert!(matches!(
            dispatch,
            ConfiguredDispatch::Filter {
                query: "ab",
                limit: Some(3),
                ..
            }
        ));

        let cli = Cli::parse_from(["bbw", "parse", "01.02.2024", "--format", "%d.%m.%Y"]);
        let dispatch = ConfiguredDispatch::from_cli(&cli).unwrap();
        assert!(dispatch.source_path().is_none());
        assert!(matches!(
            dispatch,
            ConfiguredDispatch::Parse {
                text: "01.02.2024",
                format: Some("%d.%m.%Y"),
            }
        ));

        let cli = Cli::parse_from(["bbw", "date"]);
        assert!(matches!(
            ConfiguredDispatch::from_cli(&cli),
            Some(ConfiguredDispatch::Date { date: None, .. })
        ));
    }
}
