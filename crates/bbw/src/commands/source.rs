//! Loading item sources for the filter and pick commands.
//!
//! A source is a JSON array of objects read from a file or stdin. Field names
//! come from the command line first, then from the `[source]` config section.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use bbwidgets::item::SelectItem;
use bbwidgets::source::FieldMapping;
use serde_json::Value;
use tracing::debug;

use super::{CommandError, Result};
use crate::cli::SourceArgs;

/// Merges command-line field names over the configured mapping.
pub fn resolve_mapping(args: &SourceArgs, configured: &FieldMapping) -> FieldMapping {
    FieldMapping {
        text_field: args
            .text_field
            .clone()
            .unwrap_or_else(|| configured.text_field.clone()),
        value_field: args
            .value_field
            .clone()
            .unwrap_or_else(|| configured.value_field.clone()),
        deleted_field: args
            .deleted_field
            .clone()
            .or_else(|| configured.deleted_field.clone()),
    }
}

/// Reads the raw JSON array from `path`, or stdin for `-`.
pub fn read_source(path: &Path) -> Result<Vec<Value>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| {
            CommandError::Source(format!("failed to read '{}': {}", path.display(), e))
        })?
    };

    parse_source(&content)
}

/// Parses source text into its array entries.
pub fn parse_source(content: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(content)? {
        Value::Array(entries) => Ok(entries),
        _ => Err(CommandError::Source(
            "expected a JSON array of objects".to_string(),
        )),
    }
}

/// Loads and maps a source, dropping soft-deleted items unless asked not to.
pub fn load_items(args: &SourceArgs, configured: &FieldMapping) -> Result<Vec<SelectItem<Value>>> {
    let mapping = resolve_mapping(args, configured);
    let entries = read_source(&args.source)?;
    let items = mapping.map_all(&entries)?;
    let total = items.len();

    let items: Vec<SelectItem<Value>> = if args.include_deleted {
        items
    } else {
        items.into_iter().filter(|item| !item.is_deleted).collect()
    };

    debug!(
        source = %args.source.display(),
        total,
        offered = items.len(),
        "loaded item source"
    );
    Ok(items)
}
