//! Host-owned listener storage.

use std::collections::HashMap;
use trigger_then_core::{ListenerId, ListenerProvider, ListenerRecord};

/// A registry of listeners keyed by event name.
///
/// Listeners for one name are kept in registration order.
pub struct Registry<V> {
    events: HashMap<String, Vec<ListenerRecord<V>>>,
}

impl<V> Registry<V> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            events: HashMap::new(),
        }
    }

    /// Append a listener for `name`.
    pub fn insert(&mut self, name: impl Into<String>, record: ListenerRecord<V>) -> ListenerId {
        let id = record.id();
        self.events.entry(name.into()).or_default().push(record);
        id
    }

    /// Remove the listener with `id`, wherever it is registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let mut removed = false;
        self.events.retain(|_, listeners| {
            let before = listeners.len();
            listeners.retain(|record| record.id() != id);
            removed |= listeners.len() != before;
            !listeners.is_empty()
        });
        removed
    }

    /// Remove every listener for `name`, returning how many were dropped.
    pub fn remove_event(&mut self, name: &str) -> usize {
        self.events.remove(name).map_or(0, |listeners| listeners.len())
    }

    /// Remove all listeners.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Total number of registered listeners.
    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of listeners registered for `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.events.get(name).map_or(0, Vec::len)
    }

    /// Names that currently have listeners, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.events.keys().map(String::as_str)
    }
}

impl<V> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ListenerProvider<V> for Registry<V> {
    fn resolve(&self, name: &str) -> &[ListenerRecord<V>] {
        self.events.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}
