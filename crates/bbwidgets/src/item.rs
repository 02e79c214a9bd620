//! Selectable items shown by the combo box.

use serde::{Deserialize, Serialize};

/// One option of a combo box.
///
/// `text` is both the display label and what the filter matches against.
/// `value` is returned to the host on selection. `is_deleted` is carried
/// through untouched; whether deleted items are offered is the caller's
/// policy (see [`exclude_deleted`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectItem<V> {
    /// Display and match label.
    pub text: String,
    /// Opaque payload handed back to the host.
    pub value: V,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

impl<V> SelectItem<V> {
    /// Creates a live (not deleted) item.
    pub fn new(text: impl Into<String>, value: V) -> Self {
        Self {
            text: text.into(),
            value,
            is_deleted: false,
        }
    }

    /// Creates an item with an explicit soft-delete flag.
    pub fn with_deleted(text: impl Into<String>, value: V, is_deleted: bool) -> Self {
        Self {
            text: text.into(),
            value,
            is_deleted,
        }
    }

    /// Returns true if the label is empty or whitespace only.
    ///
    /// Such items never match a non-empty query.
    pub fn has_blank_text(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Returns the items that are not soft-deleted, preserving order.
pub fn exclude_deleted<V>(items: &[SelectItem<V>]) -> Vec<&SelectItem<V>> {
    items.iter().filter(|item| !item.is_deleted).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_not_deleted() {
        let item = SelectItem::new("Inbox", 7);
        assert_eq!(item.text, "Inbox");
        assert_eq!(item.value, 7);
        assert!(!item.is_deleted);
    }

    #[test]
    fn test_blank_text() {
        assert!(SelectItem::new("", ()).has_blank_text());
        assert!(SelectItem::new("  \t", ()).has_blank_text());
        assert!(!SelectItem::new(" a ", ()).has_blank_text());
    }

    #[test]
    fn test_exclude_deleted_keeps_order() {
        let items = vec![
            SelectItem::new("one", 1),
            SelectItem::with_deleted("two", 2, true),
            SelectItem::new("three", 3),
        ];
        let live: Vec<i32> = exclude_deleted(&items).iter().map(|i| i.value).collect();
        assert_eq!(live, vec![1, 3]);
    }

    #[test]
    fn test_deserialize_defaults_deleted_flag() {
        let item: SelectItem<u32> = serde_json::from_str(r#"{"text":"a","value":1}"#).unwrap();
        assert!(!item.is_deleted);
    }
}
