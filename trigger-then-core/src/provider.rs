//! Read-only view of a listener registry.

use crate::listener::ListenerRecord;

/// The reserved event name whose listeners observe every dispatch.
pub const ALL_EVENTS: &str = "all";

/// A source of listener records keyed by event name.
///
/// This trait abstracts the host's registry. Dispatch only ever reads
/// through it and never mutates the records it resolves.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid ListenerProvider for `{V}`",
    label = "missing `ListenerProvider` implementation",
    note = "Implement `ListenerProvider<{V}>` to let the router resolve listeners by name."
)]
pub trait ListenerProvider<V> {
    /// Listeners registered for `name`, in registration order.
    ///
    /// Unknown names resolve to an empty slice.
    fn resolve(&self, name: &str) -> &[ListenerRecord<V>];

    /// Listeners registered for the catch-all name.
    fn resolve_all(&self) -> &[ListenerRecord<V>] {
        self.resolve(ALL_EVENTS)
    }
}

impl<V> ListenerProvider<V> for std::collections::HashMap<String, Vec<ListenerRecord<V>>> {
    fn resolve(&self, name: &str) -> &[ListenerRecord<V>] {
        self.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}
