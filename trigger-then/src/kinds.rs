//! Derived object kinds.
//!
//! Each kind is created through a [`Host`](crate::Host), carries its own
//! listener registry and dispatches through the host's router. The
//! operations that change an object's state announce it with
//! `trigger_then` and hand back the aggregate of what the listeners
//! returned.

use crate::emitter::{Emitter, impl_emitter};
use futures::{FutureExt, TryFutureExt, future};
use std::collections::HashMap;
use trigger_then_core::{Args, Deferred, Payload};
use trigger_then_std::Events;

/// A keyed attribute store.
///
/// Setting `key` dispatches `"change:<key> change"` with the new value.
pub struct Model<V: Payload> {
    attributes: HashMap<String, V>,
    events: Events<V>,
}

impl<V: Payload> Model<V> {
    pub(crate) fn new(events: Events<V>) -> Self {
        Self {
            attributes: HashMap::new(),
            events,
        }
    }

    /// The value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.attributes.get(key)
    }

    /// Whether `key` holds a value.
    pub fn has(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Store `value` under `key` and announce the change.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Deferred<Vec<V>> {
        let key = key.into();
        let names = format!("change:{key} change");
        self.attributes.insert(key, value.clone());
        self.trigger_then(names.as_str(), [value])
    }

    /// Number of stored attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether no attribute is stored.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// An ordered list of items.
pub struct Collection<V: Payload> {
    items: Vec<V>,
    events: Events<V>,
}

impl<V: Payload> Collection<V> {
    pub(crate) fn new(events: Events<V>) -> Self {
        Self {
            items: Vec::new(),
            events,
        }
    }

    /// Append `item` and dispatch `"add"` with it.
    pub fn add(&mut self, item: V) -> Deferred<Vec<V>> {
        self.items.push(item.clone());
        self.trigger_then("add", [item])
    }

    /// Remove the item at `index` and dispatch `"remove"` with it.
    ///
    /// Returns `None` without dispatching if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<Deferred<Vec<V>>> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        Some(self.trigger_then("remove", [item]))
    }

    /// The item at `index`.
    pub fn get(&self, index: usize) -> Option<&V> {
        self.items.get(index)
    }

    /// All items, in insertion order.
    pub fn items(&self) -> &[V] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no item.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Maps routes to listeners.
pub struct Router<V: Payload> {
    events: Events<V>,
}

impl<V: Payload> Router<V> {
    pub(crate) fn new(events: Events<V>) -> Self {
        Self { events }
    }

    /// Run `route`.
    ///
    /// Dispatches `"route:<route>"` with `args`, then `"route"` with the
    /// route name prepended. Both run before this returns; the aggregate
    /// holds the first dispatch's values followed by the second's.
    pub fn execute(&self, route: &str, args: impl Into<Args<V>>) -> Deferred<Vec<V>> {
        let args = args.into();
        let specific = self.trigger_then(format!("route:{route}").as_str(), args.clone());
        let generic = self.trigger_then("route", args.prepend(V::from(route.to_owned())));

        future::try_join(specific, generic)
            .map_ok(|(mut values, rest)| {
                values.extend(rest);
                values
            })
            .boxed()
    }
}

/// A renderable element.
pub struct View<V: Payload> {
    renders: usize,
    events: Events<V>,
}

impl<V: Payload> View<V> {
    pub(crate) fn new(events: Events<V>) -> Self {
        Self { renders: 0, events }
    }

    /// Render the view, dispatching `"render"`.
    pub fn render(&mut self) -> Deferred<Vec<V>> {
        self.renders += 1;
        self.trigger_then("render", ())
    }

    /// How many times the view was rendered.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

/// Tracks the current location fragment.
pub struct History<V: Payload> {
    fragment: Option<String>,
    events: Events<V>,
}

impl<V: Payload> History<V> {
    pub(crate) fn new(events: Events<V>) -> Self {
        Self {
            fragment: None,
            events,
        }
    }

    /// Move to `fragment` and dispatch `"route"` with it.
    pub fn navigate(&mut self, fragment: &str) -> Deferred<Vec<V>> {
        self.fragment = Some(fragment.to_owned());
        self.trigger_then("route", [V::from(fragment.to_owned())])
    }

    /// The current fragment, if navigated at all.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl_emitter!(Model, Collection, Router, View, History);
