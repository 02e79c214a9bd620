//! Headless filterable combo box.
//!
//! The combo box owns its source items, the text typed into its input, the
//! dropdown's open flag and the committed value. Hosts forward user events
//! and render [`ComboBox::filtered`] however they like.
//!
//! ```
//! use bbwidgets::combo_box::{ComboBox, Key};
//! use bbwidgets::item::SelectItem;
//!
//! let mut combo = ComboBox::new(vec![
//!     SelectItem::new("Berlin", 1),
//!     SelectItem::new("Bern", 2),
//!     SelectItem::new("Paris", 3),
//! ]);
//!
//! combo.input("par");
//! assert!(combo.is_open());
//! assert!(combo.key(Key::Enter));
//! assert_eq!(combo.value(), Some(&3));
//! assert_eq!(combo.text(), "Paris");
//! ```

use tracing::{debug, trace};

use crate::filter::filter;
use crate::item::SelectItem;
use crate::notify::{ChangeSubscribers, SubscriptionId};
use crate::source::{collect_items, ItemAdapter};

/// Keys the combo box reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Select the only visible item.
    Enter,
    /// Close the dropdown.
    Escape,
    /// Anything else; ignored.
    Other,
}

impl Key {
    /// Maps a DOM-style key code (`"Enter"`, `"NumpadEnter"`, `"Escape"`).
    pub fn from_code(code: &str) -> Self {
        match code {
            "Enter" | "NumpadEnter" => Key::Enter,
            "Escape" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Combo box state machine.
///
/// Change subscribers receive `Some(value)` on selection and `None` when the
/// box is cleared.
#[derive(Debug)]
pub struct ComboBox<V> {
    items: Vec<SelectItem<V>>,
    input: String,
    is_open: bool,
    ignore_next_commit: bool,
    value: Option<V>,
    subscribers: ChangeSubscribers<Option<V>>,
}

impl<V: Clone> ComboBox<V> {
    /// Creates a closed combo box over `items` with no value.
    pub fn new(items: Vec<SelectItem<V>>) -> Self {
        Self {
            items,
            input: String::new(),
            is_open: false,
            ignore_next_commit: false,
            value: None,
            subscribers: ChangeSubscribers::new(),
        }
    }

    /// Replaces the source items.
    pub fn set_items(&mut self, items: Vec<SelectItem<V>>) {
        debug!(count = items.len(), "combo box source replaced");
        self.items = items;
    }

    /// Rebuilds the source items from host objects.
    pub fn refresh<'a, H: 'a, A>(&mut self, hosts: impl IntoIterator<Item = &'a H>, adapter: &A)
    where
        A: ItemAdapter<H, V> + ?Sized,
    {
        self.set_items(collect_items(hosts, adapter));
    }

    /// Sets the value and input text from the host, without notifying.
    pub fn set_value(&mut self, value: Option<V>, text: impl Into<String>) {
        self.value = value;
        self.input = text.into();
    }

    /// Registers a change callback.
    pub fn on_change<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Option<V>) + Send + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Removes a change callback.
    pub fn remove_on_change(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// All source items.
    pub fn items(&self) -> &[SelectItem<V>] {
        &self.items
    }

    /// Items matching the current input, in source order.
    pub fn filtered(&self) -> Vec<&SelectItem<V>> {
        filter(&self.input, &self.items)
    }

    /// The text currently in the input.
    pub fn text(&self) -> &str {
        &self.input
    }

    /// The committed value.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Whether the dropdown is showing.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Opens a closed dropdown and closes an open one.
    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
        trace!(open = self.is_open, "combo box toggled");
    }

    /// Closes the dropdown, e.g. on a click outside the widget.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// The user typed: store the text and show the dropdown.
    pub fn input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.is_open = true;
        trace!(input = %self.input, "combo box input");
    }

    /// The input committed its text (change event).
    ///
    /// The first commit after a keyboard selection carries stale text and is
    /// dropped.
    pub fn input_committed(&mut self, text: impl Into<String>) {
        if self.ignore_next_commit {
            self.ignore_next_commit = false;
            return;
        }
        self.input = text.into();
    }

    /// Handles a key press. Returns true if it selected an item.
    pub fn key(&mut self, key: Key) -> bool {
        match key {
            Key::Enter => {
                let only = match self.filtered().as_slice() {
                    [only] => Some((only.text.clone(), only.value.clone())),
                    _ => None,
                };
                match only {
                    Some((text, value)) => {
                        self.ignore_next_commit = true;
                        self.commit(text, value);
                        true
                    }
                    None => false,
                }
            }
            Key::Escape => {
                self.close();
                false
            }
            Key::Other => false,
        }
    }

    /// Selects the `index`-th visible item. Returns false if out of range.
    pub fn select(&mut self, index: usize) -> bool {
        let picked = self
            .filtered()
            .get(index)
            .map(|item| (item.text.clone(), item.value.clone()));

        match picked {
            Some((text, value)) => {
                self.commit(text, value);
                true
            }
            None => false,
        }
    }

    /// Empties the input and value and notifies subscribers with `None`.
    pub fn clear(&mut self) {
        self.input.clear();
        self.value = None;
        debug!("combo box cleared");
        self.subscribers.emit(&self.value);
    }

    fn commit(&mut self, text: String, value: V) {
        self.input = text;
        self.value = Some(value);
        self.is_open = false;
        debug!(text = %self.input, "combo box selection");
        self.subscribers.emit(&self.value);
    }
}
