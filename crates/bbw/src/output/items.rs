//! Item list output formatting.

use bbwidgets::item::SelectItem;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value;

use super::helpers::{format_value, truncate_str};

/// Maximum label width in the table.
const LABEL_WIDTH: usize = 40;

/// JSON output structure for the filter command.
#[derive(Serialize)]
pub struct FilterOutput<'a> {
    pub query: &'a str,
    pub total: usize,
    pub matched: usize,
    pub items: Vec<ItemOutput<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'a str>,
}

/// JSON output structure for a single item.
#[derive(Serialize)]
pub struct ItemOutput<'a> {
    pub index: usize,
    pub text: &'a str,
    pub value: &'a Value,
    pub is_deleted: bool,
}

/// A matched item together with its position in the source.
pub type Indexed<'a> = (usize, &'a SelectItem<Value>);

/// Formats filter results as JSON.
pub fn format_items_json(
    query: &str,
    total: usize,
    matched: usize,
    items: &[Indexed<'_>],
    suggestion: Option<&str>,
) -> Result<String, serde_json::Error> {
    let output = FilterOutput {
        query,
        total,
        matched,
        items: items
            .iter()
            .map(|(index, item)| ItemOutput {
                index: *index,
                text: &item.text,
                value: &item.value,
                is_deleted: item.is_deleted,
            })
            .collect(),
        suggestion,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats filter results as a table.
pub fn format_items_table(items: &[Indexed<'_>], use_colors: bool) -> String {
    if items.is_empty() {
        return "No items found.\n".to_string();
    }

    let mut output = String::new();

    let header = format!("{:<5} {:<width$} {}", "#", "Text", "Value", width = LABEL_WIDTH);
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for (index, item) in items {
        let label = truncate_str(&item.text, LABEL_WIDTH);
        let value = format_value(&item.value);
        let line = format!("{:<5} {:<width$} {}", index, label, value, width = LABEL_WIDTH);

        if item.is_deleted {
            let line = format!("{line} (deleted)");
            if use_colors {
                output.push_str(&format!("{}\n", line.dimmed()));
            } else {
                output.push_str(&line);
                output.push('\n');
            }
        } else {
            output.push_str(&line);
            output.push('\n');
        }
    }

    output
}

/// Formats the hint shown when nothing matched.
pub fn format_no_match(query: &str, suggestion: Option<&str>, use_colors: bool) -> String {
    let mut output = format!("No items match '{query}'.\n");
    if let Some(suggestion) = suggestion {
        let hint = format!("Did you mean '{suggestion}'?");
        if use_colors {
            output.push_str(&format!("{}\n", hint.yellow()));
        } else {
            output.push_str(&hint);
            output.push('\n');
        }
    }
    output
}
