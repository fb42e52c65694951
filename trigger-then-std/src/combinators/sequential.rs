//! Sequential combination of listener replies.

use futures::FutureExt;
use trigger_then_core::{BoxError, Combinator, Deferred, Payload, Reply};

/// Awaits replies one after another, in reply order.
///
/// Use this when a deferred reply must not start making progress before the
/// replies in front of it have settled. Stops at the first failure; later
/// replies are dropped without being polled.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialAll;

impl<V: Payload> Combinator<V> for SequentialAll {
    fn all(&self, replies: Vec<Reply<V>>) -> Deferred<Vec<V>> {
        async move {
            let mut values = Vec::with_capacity(replies.len());
            for reply in replies {
                values.push(reply.into_future().await?);
            }
            Ok::<_, BoxError>(values)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[tokio::test]
    async fn test_resolves_in_order() {
        let replies = vec![
            Reply::deferred(async { Ok("first".to_string()) }),
            Reply::value("second".to_string()),
        ];
        let values = SequentialAll.all(replies).await.unwrap();
        assert_eq!(values, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_stops_polling_after_failure() {
        let polled = Arc::new(AtomicUsize::new(0));
        let counter = polled.clone();
        let replies = vec![
            Reply::failed("stop here"),
            Reply::deferred(async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, BoxError>("never".to_string())
            }),
        ];

        let err = SequentialAll.all(replies).await.unwrap_err();
        assert_eq!(err.to_string(), "stop here");
        assert_eq!(polled.load(Ordering::SeqCst), 0);
    }
}
