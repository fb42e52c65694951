//! Testing utilities for trigger-then.
//!
//! This module provides utilities to make testing listeners and combinators
//! easier.
//!
//! # Features
//!
//! - [`CallLog`]: Records every listener invocation and the arguments it saw
//! - [`RecordingCombinator`]: A combinator that counts how often it combined

use parking_lot::Mutex;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use trigger_then_core::{Args, Combinator, Deferred, Payload, Reply};

// ============================================================================
// Call Log
// ============================================================================

/// One recorded listener invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Call<V> {
    /// Tag of the listener that was invoked.
    pub listener: String,
    /// Arguments it was invoked with.
    pub args: Vec<V>,
}

/// A shared log of listener invocations.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// model.on("change", log.listener("first"));
///
/// model.trigger_then("change", [json!(1)]).await?;
/// assert_eq!(log.tags(), vec!["first"]);
/// ```
pub struct CallLog<V> {
    calls: Arc<Mutex<Vec<Call<V>>>>,
}

impl<V: Payload> CallLog<V> {
    /// Create a new, empty log.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A listener that records its invocation under `tag` and replies with
    /// the tag itself.
    pub fn listener<T>(&self, tag: T) -> impl Fn(&Args<V>) -> Reply<V> + Send + Sync + 'static + use<V, T>
    where
        T: Into<String>,
    {
        self.listener_with(tag, |tag, _args| Reply::value(V::from(tag.to_string())))
    }

    /// A listener that records its invocation under `tag`, then replies with
    /// whatever `reply` produces.
    pub fn listener_with<T, F>(
        &self,
        tag: T,
        reply: F,
    ) -> impl Fn(&Args<V>) -> Reply<V> + Send + Sync + 'static + use<V, T, F>
    where
        T: Into<String>,
        F: Fn(&str, &Args<V>) -> Reply<V> + Send + Sync + 'static,
    {
        let calls = Arc::clone(&self.calls);
        let tag = tag.into();
        move |args: &Args<V>| {
            calls.lock().push(Call {
                listener: tag.clone(),
                args: args.iter().cloned().collect(),
            });
            reply(&tag, args)
        }
    }

    /// All recorded calls, in invocation order.
    pub fn calls(&self) -> Vec<Call<V>> {
        self.calls.lock().clone()
    }

    /// Tags of the invoked listeners, in invocation order.
    pub fn tags(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .map(|call| call.listener.clone())
            .collect()
    }

    /// Number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl<V: Payload> Default for CallLog<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for CallLog<V> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

// ============================================================================
// Recording Combinator
// ============================================================================

/// A combinator that counts combinations and delegates to `inner`.
///
/// Clones share their counters, so a clone kept by the test observes the
/// instance that was installed.
pub struct RecordingCombinator<C> {
    inner: C,
    combined: Arc<AtomicUsize>,
    replies: Arc<AtomicUsize>,
}

impl<C> RecordingCombinator<C> {
    /// Wrap `inner`.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            combined: Arc::new(AtomicUsize::new(0)),
            replies: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times `all` was called.
    pub fn combined(&self) -> usize {
        self.combined.load(Ordering::SeqCst)
    }

    /// Total number of replies seen across all calls.
    pub fn replies(&self) -> usize {
        self.replies.load(Ordering::SeqCst)
    }
}

impl<C: Clone> Clone for RecordingCombinator<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            combined: Arc::clone(&self.combined),
            replies: Arc::clone(&self.replies),
        }
    }
}

impl<V, C> Combinator<V> for RecordingCombinator<C>
where
    V: Payload,
    C: Combinator<V>,
{
    fn all(&self, replies: Vec<Reply<V>>) -> Deferred<Vec<V>> {
        self.combined.fetch_add(1, Ordering::SeqCst);
        self.replies.fetch_add(replies.len(), Ordering::SeqCst);
        self.inner.all(replies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::ConcurrentAll;

    #[tokio::test]
    async fn test_recording_combinator_counts() {
        let recorder = RecordingCombinator::new(ConcurrentAll);
        let observer = recorder.clone();

        let values = recorder
            .all(vec![Reply::value("a".to_string()), Reply::value("b".to_string())])
            .await
            .unwrap();

        assert_eq!(values, vec!["a", "b"]);
        assert_eq!(observer.combined(), 1);
        assert_eq!(observer.replies(), 2);
    }

    #[test]
    fn test_call_log_records() {
        let log = CallLog::<String>::new();
        let listener = log.listener("first");

        let reply = listener(&Args::from(["x".to_string()]));
        assert!(matches!(reply, Reply::Value(ref v) if v == "first"));
        assert_eq!(log.tags(), vec!["first"]);
        assert_eq!(log.calls()[0].args, vec!["x".to_string()]);

        log.clear();
        assert_eq!(log.count(), 0);
    }
}
