//! Tracing decorator for combinators.

use futures::FutureExt;
use tracing::Instrument;
use trigger_then_core::{Combinator, Deferred, Payload, Reply};

/// A combinator wrapper that instruments the combined future with a
/// `tracing` span and logs how it settled.
pub struct TracingCombinator<C> {
    inner: C,
    name: &'static str,
}

impl<C> TracingCombinator<C> {
    /// Create a new `TracingCombinator` around `inner`.
    pub const fn new(inner: C, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The wrapped combinator.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Clone> Clone for TracingCombinator<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<V, C> Combinator<V> for TracingCombinator<C>
where
    V: Payload,
    C: Combinator<V>,
{
    fn all(&self, replies: Vec<Reply<V>>) -> Deferred<Vec<V>> {
        let pending = replies.iter().filter(|reply| reply.is_pending()).count();
        let span = tracing::debug_span!(
            "combine",
            combinator = %self.name,
            replies = replies.len(),
            pending,
        );
        let combined = self.inner.all(replies);

        async move {
            let result = combined.await;
            match &result {
                Ok(values) => tracing::debug!(resolved = values.len(), "combined replies resolved"),
                Err(error) => tracing::debug!(%error, "combined replies rejected"),
            }
            result
        }
        .instrument(span)
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::ConcurrentAll;

    #[tokio::test]
    async fn test_tracing_combinator_passthrough() {
        let combinator = TracingCombinator::new(ConcurrentAll, "concurrent");
        let combinator = combinator.clone();

        let values = combinator
            .all(vec![
                Reply::value("a".to_string()),
                Reply::deferred(async { Ok("b".to_string()) }),
            ])
            .await
            .unwrap();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_tracing_combinator_rejection() {
        let combinator = TracingCombinator::new(ConcurrentAll, "concurrent");
        let err = combinator
            .all(vec![Reply::<String>::failed("boom")])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
