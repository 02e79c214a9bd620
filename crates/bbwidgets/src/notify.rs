//! Value change notification for widget hosts.

use std::fmt;

/// Handle returned by [`ChangeSubscribers::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T) + Send>;

/// Callbacks invoked, in registration order, whenever a widget commits a new
/// value.
pub struct ChangeSubscribers<T> {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T> ChangeSubscribers<T> {
    /// Creates an empty subscriber list.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            callbacks: Vec::new(),
        }
    }

    /// Registers `callback` and returns a handle for removing it.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Removes a callback. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    /// Calls every callback with `value`.
    pub fn emit(&mut self, value: &T) {
        for (_, callback) in &mut self.callbacks {
            callback(value);
        }
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Returns true if nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T> Default for ChangeSubscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ChangeSubscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeSubscribers")
            .field("len", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_emit_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut subscribers = ChangeSubscribers::new();

        let first = Arc::clone(&log);
        subscribers.subscribe(move |v: &i32| first.lock().unwrap().push(("first", *v)));
        let second = Arc::clone(&log);
        subscribers.subscribe(move |v: &i32| second.lock().unwrap().push(("second", *v)));

        subscribers.emit(&5);
        assert_eq!(*log.lock().unwrap(), vec![("first", 5), ("second", 5)]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Arc::new(Mutex::new(0));
        let mut subscribers = ChangeSubscribers::new();
        let counter = Arc::clone(&count);
        let id = subscribers.subscribe(move |_: &()| *counter.lock().unwrap() += 1);

        subscribers.emit(&());
        assert!(subscribers.unsubscribe(id));
        assert!(!subscribers.unsubscribe(id));
        subscribers.emit(&());

        assert_eq!(*count.lock().unwrap(), 1);
        assert!(subscribers.is_empty());
    }

    #[test]
    fn test_emit_without_subscribers() {
        let mut subscribers: ChangeSubscribers<String> = ChangeSubscribers::default();
        subscribers.emit(&"ignored".to_string());
        assert_eq!(subscribers.len(), 0);
    }
}
