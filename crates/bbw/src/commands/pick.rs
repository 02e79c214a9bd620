//! Pick command implementation.
//!
//! Drives a [`ComboBox`] from terminal prompts: the user types a search,
//! a single match is taken directly, several matches are offered in a list.

use std::sync::{Arc, Mutex};

use bbwidgets::combo_box::{ComboBox, Key};
use bbwidgets::source::FieldMapping;
use dialoguer::{Input, Select};
use serde_json::Value;
use tracing::debug;

use super::source::load_items;
use super::{ensure_interactive, CommandContext, CommandError, Result};
use crate::cli::SourceArgs;
use crate::output::helpers::format_value;

/// What the prompt loop does after a search was typed.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    /// Nothing visible; ask again.
    NoMatch,
    /// Exactly one visible item, taken as with Enter.
    Single,
    /// Let the user choose among these labels.
    Choose(Vec<String>),
}

fn next_step(combo: &ComboBox<Value>) -> Step {
    let visible = combo.filtered();
    match visible.len() {
        0 => Step::NoMatch,
        1 => Step::Single,
        _ => Step::Choose(visible.iter().map(|item| display_label(&item.text)).collect()),
    }
}

fn display_label(text: &str) -> String {
    if text.trim().is_empty() {
        "(blank)".to_string()
    } else {
        text.to_string()
    }
}

/// Executes the pick command.
///
/// Prints the selected value on stdout.
///
/// # Errors
///
/// Returns an error without a terminal, or if the source cannot be loaded.
pub fn execute(ctx: &CommandContext, source: &SourceArgs, mapping: &FieldMapping) -> Result<()> {
    ensure_interactive(ctx, "pick")?;

    let items = load_items(source, mapping)?;
    if items.is_empty() {
        return Err(CommandError::Source("the item source is empty".to_string()));
    }

    let mut combo = ComboBox::new(items);
    let selected: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&selected);
    combo.on_change(move |value: &Option<Value>| {
        if let Ok(mut slot) = sink.lock() {
            slot.clone_from(value);
        }
    });

    loop {
        let query: String = Input::new()
            .with_prompt("Search (empty shows all)")
            .allow_empty(true)
            .interact_text()?;
        combo.input(query);

        match next_step(&combo) {
            Step::NoMatch => {
                if !ctx.quiet {
                    eprintln!("No items match '{}'.", combo.text());
                }
            }
            Step::Single => {
                combo.key(Key::Enter);
                break;
            }
            Step::Choose(labels) => {
                let choice = Select::new()
                    .with_prompt("Select an item (Esc to search again)")
                    .items(&labels)
                    .default(0)
                    .interact_opt()?;
                match choice {
                    Some(index) => {
                        combo.select(index);
                        break;
                    }
                    None => {
                        combo.key(Key::Escape);
                    }
                }
            }
        }
    }

    let value = selected
        .lock()
        .map_err(|_| CommandError::Prompt("selection state poisoned".to_string()))?
        .clone();
    debug!(text = combo.text(), "pick finished");

    if let Some(value) = value {
        if !ctx.quiet {
            eprintln!("Selected '{}'", combo.text());
        }
        println!("{}", format_value(&value));
    }
    Ok(())
}
