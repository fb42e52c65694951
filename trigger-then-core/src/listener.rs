//! # Listener Records
//!
//! A listener record pairs a callback with the context it runs under.
//! Records are owned by the host's registry; the dispatch only borrows them
//! for the length of a single call.
//!
//! The context plays the role of a method receiver: a listener registered
//! with context `ctx` observes `ctx` every time it is invoked, no matter
//! which object triggered the event.

use crate::{
    error::TriggerError,
    payload::{Args, Payload},
    reply::Reply,
};
use std::{
    any::Any,
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Allocates a fresh identifier.
    pub fn next() -> Self {
        Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// The receiver a listener is invoked with.
#[derive(Clone, Default)]
pub struct Context(Option<Arc<dyn Any + Send + Sync>>);

impl Context {
    /// A context carrying nothing.
    pub const fn none() -> Self {
        Self(None)
    }

    /// Wraps a shared value as a context.
    pub fn new<C: Any + Send + Sync>(value: Arc<C>) -> Self {
        Self(Some(value))
    }

    /// Whether this context carries no value.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Borrows the context as `C`, if that is what it holds.
    pub fn downcast_ref<C: Any>(&self) -> Option<&C> {
        self.0.as_deref().and_then(|value| value.downcast_ref::<C>())
    }

    /// Whether both contexts point at the same value.
    ///
    /// Two empty contexts compare equal.
    pub fn ptr_eq(&self, other: &Context) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(_) => f.write_str("Context(..)"),
            None => f.write_str("Context(None)"),
        }
    }
}

/// A type-erased listener callback.
pub type Callback<V> = Arc<dyn Fn(&Context, &Args<V>) -> Reply<V> + Send + Sync>;

/// A registered callback plus the context it executes with.
pub struct ListenerRecord<V> {
    id: ListenerId,
    callback: Callback<V>,
    ctx: Context,
}

impl<V: Payload> ListenerRecord<V> {
    /// Creates a record with an empty context.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Args<V>) -> Reply<V> + Send + Sync + 'static,
    {
        Self {
            id: ListenerId::next(),
            callback: Arc::new(move |_ctx: &Context, args: &Args<V>| callback(args)),
            ctx: Context::none(),
        }
    }

    /// Creates a record whose callback receives `ctx` as its receiver.
    pub fn with_context<C, F>(ctx: Arc<C>, callback: F) -> Self
    where
        C: Any + Send + Sync,
        F: Fn(&C, &Args<V>) -> Reply<V> + Send + Sync + 'static,
    {
        let erased = move |ctx: &Context, args: &Args<V>| match ctx.downcast_ref::<C>() {
            Some(receiver) => callback(receiver, args),
            None => Reply::failed(TriggerError::ContextMismatch {
                expected: std::any::type_name::<C>(),
            }),
        };
        Self::from_parts(Arc::new(erased), Context::new(ctx))
    }

    /// Assembles a record from an already erased callback and context.
    pub fn from_parts(callback: Callback<V>, ctx: Context) -> Self {
        Self {
            id: ListenerId::next(),
            callback,
            ctx,
        }
    }

    /// Invokes the callback under this record's context.
    pub fn invoke(&self, args: &Args<V>) -> Reply<V> {
        (self.callback)(&self.ctx, args)
    }
}

impl<V> ListenerRecord<V> {
    /// The record's identifier.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// The context the callback is invoked with.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// The type-erased callback.
    pub fn callback(&self) -> &Callback<V> {
        &self.callback
    }
}

impl<V> Clone for ListenerRecord<V> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            callback: Arc::clone(&self.callback),
            ctx: self.ctx.clone(),
        }
    }
}

impl<V> fmt::Debug for ListenerRecord<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRecord")
            .field("id", &self.id)
            .field("ctx", &self.ctx)
            .finish_non_exhaustive()
    }
}
