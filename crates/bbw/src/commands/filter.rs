//! Filter command implementation.
//!
//! Reads an item source and prints the items whose label contains every
//! token of the query.

use bbwidgets::filter::filter_indices;
use bbwidgets::item::SelectItem;
use bbwidgets::source::FieldMapping;
use serde_json::Value;
use strsim::levenshtein;
use tracing::debug;

use super::source::load_items;
use super::{CommandContext, Result};
use crate::cli::SourceArgs;
use crate::output::{format_items_json, format_items_table, format_no_match, Indexed};

/// Maximum Levenshtein distance for a "did you mean" hint.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Options for the filter command.
#[derive(Debug)]
pub struct FilterOptions<'a> {
    /// Raw query text.
    pub query: &'a str,
    /// Where to read items from.
    pub source: &'a SourceArgs,
    /// Maximum number of items to print.
    pub limit: Option<usize>,
}

/// Executes the filter command.
///
/// # Errors
///
/// Returns an error if the source cannot be read or mapped.
pub fn execute(ctx: &CommandContext, opts: &FilterOptions, mapping: &FieldMapping) -> Result<()> {
    let items = load_items(opts.source, mapping)?;

    let matched = matching(opts.query, &items);
    let matched_count = matched.len();
    let shown = apply_limit(matched, opts.limit);

    debug!(
        query = opts.query,
        total = items.len(),
        matched = matched_count,
        shown = shown.len(),
        "filtered item source"
    );

    let suggestion = if matched_count == 0 {
        find_similar_label(opts.query, items.iter().map(|item| item.text.as_str()))
    } else {
        None
    };

    if ctx.json_output {
        let output = format_items_json(
            opts.query,
            items.len(),
            matched_count,
            &shown,
            suggestion.as_deref(),
        )?;
        println!("{output}");
    } else if matched_count == 0 {
        if !ctx.quiet {
            print!(
                "{}",
                format_no_match(opts.query, suggestion.as_deref(), ctx.use_colors)
            );
        }
    } else {
        print!("{}", format_items_table(&shown, ctx.use_colors));
        if !ctx.quiet && shown.len() < matched_count {
            eprintln!("Showing {} of {} matches", shown.len(), matched_count);
        }
    }

    Ok(())
}

/// Pairs every matching item with its position in the source.
fn matching<'a>(query: &str, items: &'a [SelectItem<Value>]) -> Vec<Indexed<'a>> {
    filter_indices(query, items)
        .into_iter()
        .map(|index| (index, &items[index]))
        .collect()
}

fn apply_limit(mut items: Vec<Indexed<'_>>, limit: Option<usize>) -> Vec<Indexed<'_>> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}

/// Finds the label or label word closest to the query.
///
/// Returns `None` for exact matches and for anything further than
/// [`MAX_SUGGESTION_DISTANCE`] edits away.
fn find_similar_label<'a>(query: &str, labels: impl Iterator<Item = &'a str>) -> Option<String> {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return None;
    }

    let (best_match, best_distance) = labels
        .flat_map(|label| std::iter::once(label).chain(label.split_whitespace()))
        .filter(|candidate| !candidate.trim().is_empty())
        .map(|candidate| {
            let distance = levenshtein(&query_lower, &candidate.to_lowercase());
            (candidate, distance)
        })
        .min_by_key(|(_, distance)| *distance)?;

    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match.to_string())
    } else {
        None
    }
}
