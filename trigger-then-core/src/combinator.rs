//! # Combinator
//!
//! The combinator reduces the replies of one dispatch into a single
//! deferred value. Its contract:
//!
//! - resolves to the resolved values, in input order, once every reply has
//!   resolved;
//! - rejects with the first failure it observes, after which the remaining
//!   replies no longer affect the outcome.
//!
//! Work a listener already started is not undone by a rejection.

use crate::{
    payload::Payload,
    reply::{Deferred, Reply},
};

/// Combines listener replies into one deferred-completion value.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Combinator` for `{V}`",
    label = "missing `Combinator` implementation",
    note = "Implement `all`, or pass a closure `Fn(Vec<Reply<{V}>>) -> Deferred<Vec<{V}>>`."
)]
pub trait Combinator<V: Payload>: Send + Sync + 'static {
    /// Combines all replies into one deferred value.
    fn all(&self, replies: Vec<Reply<V>>) -> Deferred<Vec<V>>;
}

// Blanket impl for closures
impl<V, F> Combinator<V> for F
where
    V: Payload,
    F: Fn(Vec<Reply<V>>) -> Deferred<Vec<V>> + Send + Sync + 'static,
{
    fn all(&self, replies: Vec<Reply<V>>) -> Deferred<Vec<V>> {
        (self)(replies)
    }
}
