//! Raw listener results.
//!
//! A listener may answer synchronously, hand back work that completes later,
//! or fail on the spot. [`Reply`] captures all three so the dispatch can
//! collect them side by side and let a [`Combinator`] decide how the
//! aggregate settles.
//!
//! [`Combinator`]: crate::Combinator

use crate::error::{BoxError, TriggerError};
use futures::{
    FutureExt,
    future::{self, BoxFuture},
};
use std::{fmt, future::Future, panic::AssertUnwindSafe};

/// A deferred-completion value: resolves to `T` or rejects with a [`BoxError`].
pub type Deferred<T> = BoxFuture<'static, Result<T, BoxError>>;

/// The raw result of invoking one listener.
pub enum Reply<V> {
    /// The listener produced a value synchronously.
    Value(V),
    /// The listener produced a value that settles later.
    Deferred(Deferred<V>),
    /// The listener failed synchronously.
    Failed(BoxError),
}

impl<V> Reply<V> {
    /// A synchronous value.
    pub fn value(value: V) -> Self {
        Reply::Value(value)
    }

    /// A value produced by `future` once it settles.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Result<V, BoxError>> + Send + 'static,
    {
        Reply::Deferred(Box::pin(future))
    }

    /// A synchronous failure.
    pub fn failed(error: impl Into<BoxError>) -> Self {
        Reply::Failed(error.into())
    }

    /// Whether this reply still has to be awaited.
    pub fn is_pending(&self) -> bool {
        matches!(self, Reply::Deferred(_))
    }

    /// Whether this reply already failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Reply::Failed(_))
    }

    /// Turns the reply into a future, ready immediately unless deferred.
    pub fn into_future(self) -> Deferred<V>
    where
        V: Send + 'static,
    {
        match self {
            Reply::Value(value) => future::ready(Ok(value)).boxed(),
            Reply::Deferred(fut) => fut,
            Reply::Failed(err) => future::ready(Err(err)).boxed(),
        }
    }

    /// Converts a panic while polling a deferred reply into a rejection.
    pub(crate) fn guard_panics(self) -> Self
    where
        V: Send + 'static,
    {
        match self {
            Reply::Deferred(fut) => Reply::Deferred(
                AssertUnwindSafe(fut)
                    .catch_unwind()
                    .map(|outcome| match outcome {
                        Ok(result) => result,
                        Err(payload) => Err(TriggerError::from_panic(payload).into()),
                    })
                    .boxed(),
            ),
            other => other,
        }
    }
}

impl<V, E> From<Result<V, E>> for Reply<V>
where
    E: Into<BoxError>,
{
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Reply::Value(value),
            Err(err) => Reply::Failed(err.into()),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Reply<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Reply::Deferred(_) => f.write_str("Deferred(..)"),
            Reply::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
        }
    }
}
