//! Turning host objects into [`SelectItem`]s.
//!
//! Hosts own arbitrary option types. An [`ItemAdapter`] maps one host object
//! to a [`SelectItem`]; [`collect_items`] applies it once per source refresh.
//! [`FieldMapping`] is a ready-made adapter for JSON objects addressed by
//! field name.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::error::{Error, Result};
use crate::item::SelectItem;

/// Maps a host object to a select item.
pub trait ItemAdapter<H, V> {
    /// Builds the select item for `host`.
    fn to_select_item(&self, host: &H) -> SelectItem<V>;
}

impl<H, V, F> ItemAdapter<H, V> for F
where
    F: Fn(&H) -> SelectItem<V>,
{
    fn to_select_item(&self, host: &H) -> SelectItem<V> {
        self(host)
    }
}

/// Maps every host object through `adapter`, preserving order.
pub fn collect_items<'a, H, V, A>(hosts: impl IntoIterator<Item = &'a H>, adapter: &A) -> Vec<SelectItem<V>>
where
    H: 'a,
    A: ItemAdapter<H, V> + ?Sized,
{
    hosts
        .into_iter()
        .map(|host| adapter.to_select_item(host))
        .collect()
}

/// Field names used to pull text, value and deleted flag out of JSON objects.
///
/// Missing fields are tolerated: no text gives an empty (unmatchable) label,
/// no value gives `null`, and no deleted flag means not deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMapping {
    /// Field holding the display label.
    pub text_field: String,
    /// Field holding the value returned on selection.
    pub value_field: String,
    /// Field holding the soft-delete flag, if the source has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_field: Option<String>,
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            text_field: "text".to_string(),
            value_field: "value".to_string(),
            deleted_field: None,
        }
    }
}

impl FieldMapping {
    /// Creates a mapping without a deleted flag.
    pub fn new(text_field: impl Into<String>, value_field: impl Into<String>) -> Self {
        Self {
            text_field: text_field.into(),
            value_field: value_field.into(),
            deleted_field: None,
        }
    }

    /// Sets the field holding the soft-delete flag.
    pub fn with_deleted_field(mut self, field: impl Into<String>) -> Self {
        self.deleted_field = Some(field.into());
        self
    }

    /// Maps one JSON value, reporting a deleted flag of the wrong type.
    ///
    /// Non-object values map to an empty item.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldType`] when the deleted field holds anything but
    /// a boolean or `null`.
    pub fn try_map(&self, host: &Value) -> Result<SelectItem<Value>> {
        let text = host.get(&self.text_field).map(label_of).unwrap_or_default();
        let value = host.get(&self.value_field).cloned().unwrap_or(Value::Null);

        let is_deleted = match self.deleted_field.as_deref().and_then(|f| host.get(f)) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(other) => {
                return Err(Error::FieldType {
                    field: self.deleted_field.clone().unwrap_or_default(),
                    expected: "a boolean",
                    found: json_type(other),
                })
            }
        };

        Ok(SelectItem::with_deleted(text, value, is_deleted))
    }

    /// Maps a JSON array of objects.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnObject`] for entries that are not objects, and
    /// the errors of [`FieldMapping::try_map`].
    pub fn map_all(&self, hosts: &[Value]) -> Result<Vec<SelectItem<Value>>> {
        let items = hosts
            .iter()
            .enumerate()
            .map(|(index, host)| {
                if !host.is_object() {
                    return Err(Error::NotAnObject { index });
                }
                self.try_map(host)
            })
            .collect::<Result<Vec<_>>>()?;

        trace!(count = items.len(), text_field = %self.text_field, "mapped item source");
        Ok(items)
    }
}

impl ItemAdapter<Value, Value> for FieldMapping {
    fn to_select_item(&self, host: &Value) -> SelectItem<Value> {
        self.try_map(host).unwrap_or_else(|_| {
            let text = host.get(&self.text_field).map(label_of).unwrap_or_default();
            let value = host.get(&self.value_field).cloned().unwrap_or(Value::Null);
            SelectItem::new(text, value)
        })
    }
}

/// Renders a JSON value as a label; strings are used verbatim.
fn label_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
