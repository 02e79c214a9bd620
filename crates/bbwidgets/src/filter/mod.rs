//! Token-based substring filtering for combo box items.
//!
//! A query is lowercased, trimmed and split on single spaces. An item is kept
//! when its lowercased label contains every token. Source order is preserved
//! and nothing is ever reordered or deduplicated.
//!
//! # Rules
//!
//! - An empty or whitespace-only query keeps every item, blank labels included.
//! - Items with a blank label never match a non-empty query.
//! - Matching is plain substring containment, not prefix or word boundary.
//! - Two spaces in a row produce an empty token, which every label contains,
//!   so it has no effect.
//!
//! # Example
//!
//! ```
//! use bbwidgets::filter::{filter, SearchQuery};
//! use bbwidgets::item::SelectItem;
//!
//! let items = vec![
//!     SelectItem::new("abcdef", 'a'),
//!     SelectItem::new("xycd", 'b'),
//!     SelectItem::new("ab", 'c'),
//! ];
//!
//! let matched = filter("ab cd", &items);
//! assert_eq!(matched, vec![&items[0]]);
//!
//! let query = SearchQuery::parse("AB");
//! assert_eq!(query.tokens(), ["ab"]);
//! ```

mod query;

pub use query::SearchQuery;

use crate::item::SelectItem;

/// Returns the items whose labels contain every token of `query`.
///
/// The result borrows from `items`; the source cannot be mutated through it.
pub fn filter<'a, V>(query: &str, items: &'a [SelectItem<V>]) -> Vec<&'a SelectItem<V>> {
    SearchQuery::parse(query).apply(items)
}

/// Like [`filter`], but returns positions in `items` instead of references.
pub fn filter_indices<V>(query: &str, items: &[SelectItem<V>]) -> Vec<usize> {
    let query = SearchQuery::parse(query);
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| query.keeps(item))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests;
