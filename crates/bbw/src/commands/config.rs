//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/bbw/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use bbwidgets::calendar::FirstWeekDay;
use bbwidgets::config::{CalendarConfig, WidgetConfig};
use bbwidgets::format::DateFormat;
use bbwidgets::locale::DateLocale;
use bbwidgets::source::FieldMapping;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "BBW_CONFIG";

/// Default config file contents.
const DEFAULT_CONFIG: &str = r#"# bbw - widget CLI configuration

# Config schema version (do not modify)
version = 1

# Output preferences
[output]
# color = true              # Enable colors

# Date picker
[calendar]
# first_week_day = "sunday" # "sunday" or "monday"
# date_format = "%d.%m.%Y"  # strftime pattern for display and parsing

# Field names used when reading JSON item sources
[source]
# text_field = "text"
# value_field = "value"
# deleted_field = "is_deleted"

# Month and weekday names (English when omitted)
# [locale]
# month_names = ["January", "February", ...]            # 12 names
# abbreviated_day_names = ["Sun", "Mon", ...]           # 7 names, Sunday first
"#;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Date picker settings.
    #[serde(default)]
    pub calendar: CalendarConfig,

    /// Item source field names.
    #[serde(default)]
    pub source: FieldMapping,

    /// Month and weekday names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<DateLocale>,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            output: OutputConfig::default(),
            calendar: CalendarConfig::default(),
            source: FieldMapping::default(),
            locale: None,
        }
    }
}

impl Config {
    /// The widget-facing part of the configuration.
    pub fn widgets(&self) -> WidgetConfig {
        WidgetConfig {
            calendar: self.calendar.clone(),
            locale: self.locale.clone(),
            source: self.source.clone(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/bbw/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            return Ok(parent.to_path_buf());
        }
    }

    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("bbw"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("bbw"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    debug!(path = %path.display(), version = config.version, "loaded config");
    migrate_config(config)
}

/// Migrates config to current version if needed.
/// Returns the config as-is if already at current version.
fn migrate_config(mut config: Config) -> Result<Config> {
    // Version 1 is the initial schema.
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Saves the configuration to disk.
fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| CommandError::Config(format!("Failed to create config directory: {}", e)))?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        println!("[output]");
        match config.output.color {
            Some(color) => println!("  color: {}", color),
            None => println!("  color: (default) true"),
        }

        println!("\n[calendar]");
        println!("  first_week_day: {}", config.calendar.first_week_day);
        println!("  date_format: {}", config.calendar.date_format);

        println!("\n[source]");
        println!("  text_field: {}", config.source.text_field);
        println!("  value_field: {}", config.source.value_field);
        if let Some(ref field) = config.source.deleted_field {
            println!("  deleted_field: {}", field);
        }

        println!("\n[locale]");
        if config.locale.is_some() {
            println!("  custom names");
        } else {
            println!("  (default) English");
        }
    }

    Ok(())
}

/// Executes the config edit command.
pub fn execute_edit(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| CommandError::Config(format!("Failed to create config directory: {}", e)))?;
    }

    if !path.exists() {
        fs::write(&path, DEFAULT_CONFIG)
            .map_err(|e| CommandError::Config(format!("Failed to create config file: {}", e)))?;

        if !ctx.quiet && !ctx.json_output {
            eprintln!("Created default config at: {}", path.display());
        }
    }

    let editor = env::var("EDITOR")
        .or_else(|_| env::var("VISUAL"))
        .unwrap_or_else(|_| "vi".to_string());

    debug!(path = %path.display(), %editor, "opening config in editor");

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|e| CommandError::Config(format!("Failed to open editor '{}': {}", editor, e)))?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": if status.success() { "success" } else { "error" },
            "editor": editor,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        if status.success() {
            // Surface syntax errors right away instead of on the next command.
            load_config()?;
            println!("Config saved.");
        } else {
            eprintln!("Editor exited with error");
        }
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Applies `key = value` to `config`.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let (section, field) = match key.split_once('.') {
        Some((section, field)) => (Some(section), field),
        None => (None, key),
    };

    match (section, field) {
        (Some("output"), "color") => {
            config.output.color = Some(parse_bool(value)?);
        }
        (Some("calendar"), "first_week_day") => {
            config.calendar.first_week_day = value
                .parse::<FirstWeekDay>()
                .map_err(|e| CommandError::Config(e.to_string()))?;
        }
        (Some("calendar"), "date_format") => {
            config.calendar.date_format = DateFormat::new(value)?;
        }
        (Some("source"), "text_field") => {
            config.source.text_field = non_empty(key, value)?;
        }
        (Some("source"), "value_field") => {
            config.source.value_field = non_empty(key, value)?;
        }
        (Some("source"), "deleted_field") => {
            config.source.deleted_field = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            };
        }
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: output.color, calendar.first_week_day, calendar.date_format, source.text_field, source.value_field, source.deleted_field",
                key
            )));
        }
    }

    Ok(())
}

/// Executes the config set command.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    let path = get_config_path()?;

    apply_setting(&mut config, &opts.key, &opts.value)?;
    save_config(&config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(CommandError::Config(format!("{} cannot be empty", key)));
    }
    Ok(value.to_string())
}

/// Parses a boolean value from string.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    /// Points BBW_CONFIG at `path` for the duration of `f`.
    fn with_config_path<T>(path: &std::path::Path, f: impl FnOnce() -> T) -> T {
        let original = env::var(CONFIG_ENV).ok();
        env::set_var(CONFIG_ENV, path);
        let result = f();
        match original {
            Some(val) => env::set_var(CONFIG_ENV, val),
            None => env::remove_var(CONFIG_ENV),
        }
        result
    }

    #[test]
    fn test_parse_bool_values() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool("YES").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(!parse_bool("False").unwrap());
        assert!(parse_bool("maybe").is_err());
        assert!(parse_bool("").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.output.color.is_none());
        assert_eq!(config.calendar.first_week_day, FirstWeekDay::Sunday);
        assert_eq!(config.source.text_field, "text");
        assert!(config.locale.is_none());
    }

    #[test]
    fn test_default_config_template_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.version, 1);
        assert_eq!(config.calendar.date_format.pattern(), "%d.%m.%Y");
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
version = 1

[output]
color = false

[calendar]
first_week_day = "monday"
date_format = "%Y-%m-%d"

[source]
text_field = "name"
value_field = "id"
deleted_field = "archived"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.color, Some(false));
        assert_eq!(config.calendar.first_week_day, FirstWeekDay::Monday);
        assert_eq!(config.calendar.date_format.pattern(), "%Y-%m-%d");

        let widgets = config.widgets();
        assert_eq!(widgets.source.text_field, "name");
        assert_eq!(widgets.source.deleted_field.as_deref(), Some("archived"));
    }

    #[test]
    fn test_config_deserialization_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.output.color.is_none());
    }

    #[test]
    fn test_config_rejects_bad_pattern() {
        let toml_str = r#"
[calendar]
date_format = "%H"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.output.color = Some(true);
        config.calendar.first_week_day = FirstWeekDay::Monday;

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("version = 1"));
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("color = true"));
        assert!(toml_str.contains("first_week_day = \"monday\""));
    }

    #[test]
    fn test_config_deserialization_with_future_version() {
        let config: Config = toml::from_str("version = 999").unwrap();
        assert_eq!(config.version, 999);
        assert_eq!(migrate_config(config).unwrap().version, CONFIG_VERSION);
    }

    #[test]
    fn test_apply_setting_known_keys() {
        let mut config = Config::default();
        apply_setting(&mut config, "output.color", "no").unwrap();
        apply_setting(&mut config, "calendar.first_week_day", "monday").unwrap();
        apply_setting(&mut config, "calendar.date_format", "%Y/%m/%d").unwrap();
        apply_setting(&mut config, "source.text_field", "label").unwrap();
        apply_setting(&mut config, "source.deleted_field", "gone").unwrap();

        assert_eq!(config.output.color, Some(false));
        assert_eq!(config.calendar.first_week_day, FirstWeekDay::Monday);
        assert_eq!(config.calendar.date_format.pattern(), "%Y/%m/%d");
        assert_eq!(config.source.text_field, "label");
        assert_eq!(config.source.deleted_field.as_deref(), Some("gone"));

        apply_setting(&mut config, "source.deleted_field", "").unwrap();
        assert!(config.source.deleted_field.is_none());
    }

    #[test]
    fn test_apply_setting_rejects_bad_values() {
        let mut config = Config::default();
        assert!(apply_setting(&mut config, "calendar.first_week_day", "friday").is_err());
        assert!(matches!(
            apply_setting(&mut config, "calendar.date_format", "%Y"),
            Err(CommandError::Widget(_))
        ));
        assert!(apply_setting(&mut config, "source.text_field", " ").is_err());
        assert!(apply_setting(&mut config, "token", "x").is_err());
    }

    #[test]
    #[serial]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");
        let config = with_config_path(&path, load_config).unwrap();
        assert_eq!(config.calendar.first_week_day, FirstWeekDay::Sunday);
    }

    #[test]
    #[serial]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let loaded = with_config_path(&path, || {
            let mut config = Config::default();
            config.calendar.first_week_day = FirstWeekDay::Monday;
            config.source.value_field = "id".to_string();
            save_config(&config)?;
            load_config()
        })
        .unwrap();

        assert_eq!(loaded.calendar.first_week_day, FirstWeekDay::Monday);
        assert_eq!(loaded.source.value_field, "id");
    }

    #[test]
    #[serial]
    fn test_load_reports_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[calendar]\nfirst_week_day = \"friday\"\n").unwrap();

        let err = with_config_path(&path, load_config).unwrap_err();
        assert!(matches!(err, CommandError::Config(_)));
    }

    #[test]
    #[serial]
    fn test_config_path_env_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        let resolved = with_config_path(&path, get_config_path).unwrap();
        assert_eq!(resolved, path);
    }
}
