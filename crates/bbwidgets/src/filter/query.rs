//! Parsed filter queries.

use tracing::debug;

use crate::item::SelectItem;

/// A filter query split into lowercase tokens.
///
/// A query with no tokens is a passthrough: it keeps every item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    tokens: Vec<String>,
}

impl SearchQuery {
    /// Parses raw input text into a query.
    ///
    /// Empty or whitespace-only input yields a passthrough query. Otherwise the
    /// text is lowercased, trimmed and split on the space character; runs of
    /// spaces leave empty tokens in place.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        let tokens = trimmed
            .to_lowercase()
            .split(' ')
            .map(str::to_string)
            .collect();

        Self { tokens }
    }

    /// The lowercase tokens, in query order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns true if this query keeps every item unchanged.
    pub fn is_passthrough(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns true if `label` contains every token, ignoring case.
    ///
    /// Blank labels never match a non-passthrough query.
    pub fn matches(&self, label: &str) -> bool {
        if self.is_passthrough() {
            return true;
        }
        if label.trim().is_empty() {
            return false;
        }

        let label = label.to_lowercase();
        self.tokens.iter().all(|token| label.contains(token.as_str()))
    }

    pub(crate) fn keeps<V>(&self, item: &SelectItem<V>) -> bool {
        self.matches(&item.text)
    }

    /// Applies the query to `items`, preserving their order.
    pub fn apply<'a, V>(&self, items: &'a [SelectItem<V>]) -> Vec<&'a SelectItem<V>> {
        if self.is_passthrough() {
            return items.iter().collect();
        }

        let kept: Vec<&SelectItem<V>> = items.iter().filter(|item| self.keeps(item)).collect();
        debug!(
            tokens = self.tokens.len(),
            total = items.len(),
            matched = kept.len(),
            "filtered select items"
        );
        kept
    }
}
