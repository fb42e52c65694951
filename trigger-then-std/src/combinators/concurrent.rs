//! Concurrent combination of listener replies.

use futures::{FutureExt, future::try_join_all};
use trigger_then_core::{Combinator, Deferred, Payload, Reply};

/// Polls every reply concurrently.
///
/// Resolves with the values in reply order once all have resolved. The first
/// reply to fail rejects the aggregate and the others are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcurrentAll;

impl<V: Payload> Combinator<V> for ConcurrentAll {
    fn all(&self, replies: Vec<Reply<V>>) -> Deferred<Vec<V>> {
        try_join_all(replies.into_iter().map(Reply::into_future)).boxed()
    }
}
