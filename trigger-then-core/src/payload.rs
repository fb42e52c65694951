//! Payload values and argument tuples.

use std::ops::Index;

/// A marker trait for values passed to and returned from listeners.
///
/// Payloads must be cheap enough to clone per dispatch and convertible from
/// a `String`, which is how the event name reaches catch-all listeners.
///
/// # Example
///
/// ```rust,ignore
/// // serde_json::Value, String and most owned string-like types qualify.
/// fn assert_payload<V: Payload>() {}
/// assert_payload::<serde_json::Value>();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Payload",
    label = "must be `Clone + Send + Sync + 'static + From<String>`",
    note = "Listener arguments and results must be thread-safe, clonable and buildable from an event name."
)]
pub trait Payload: Clone + Send + Sync + 'static + From<String> {}

impl<T> Payload for T where T: Clone + Send + Sync + 'static + From<String> {}

/// An ordered argument tuple handed to every listener of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args<V> {
    values: Vec<V>,
}

impl<V> Args<V> {
    /// Creates an empty argument tuple.
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the tuple carries no arguments.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the argument at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }

    /// Returns the first argument, if present.
    pub fn first(&self) -> Option<&V> {
        self.values.first()
    }

    /// Iterates over the arguments in order.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    /// Borrows the arguments as a slice.
    pub fn as_slice(&self) -> &[V] {
        &self.values
    }

    /// Consumes the tuple, returning the underlying values.
    pub fn into_vec(self) -> Vec<V> {
        self.values
    }
}

impl<V: Clone> Args<V> {
    /// Returns a new tuple with `value` in front of the existing arguments.
    pub fn prepend(&self, value: V) -> Self {
        let mut values = Vec::with_capacity(self.values.len() + 1);
        values.push(value);
        values.extend(self.values.iter().cloned());
        Self { values }
    }
}

impl<V> Default for Args<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<Vec<V>> for Args<V> {
    fn from(values: Vec<V>) -> Self {
        Self { values }
    }
}

impl<V, const N: usize> From<[V; N]> for Args<V> {
    fn from(values: [V; N]) -> Self {
        Self {
            values: values.into(),
        }
    }
}

impl<V> From<()> for Args<V> {
    fn from(_: ()) -> Self {
        Self::new()
    }
}

impl<V> FromIterator<V> for Args<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<V> Index<usize> for Args<V> {
    type Output = V;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl<'a, V> IntoIterator for &'a Args<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
