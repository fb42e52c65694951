//! # Host Object Model
//!
//! A [`Host`] is one wiring of the event-capable object model: it owns the
//! [`EventRouter`] every object created from it dispatches through, plus a
//! shared events bus of its own.
//!
//! # Installation
//!
//! Nothing can be dispatched until a combinator is installed. Installing
//! again swaps the combinator for every object created from the host,
//! including objects created before the swap. Listeners stay registered.
//!
//! ```rust,ignore
//! let host = Host::<Value>::new();
//! install(&host, ConcurrentAll);
//!
//! let mut model = host.model();
//! model.on("change:title", |args| Reply::value(args[0].clone()));
//! let values = model.set("title", json!("hello")).await?;
//! ```

use crate::{
    emitter::impl_emitter,
    kinds::{Collection, History, Model, Router, View},
};
use std::sync::Arc;
use trigger_then_core::{Combinator, Payload};
use trigger_then_std::{EventRouter, Events};

/// One wiring of the object model.
pub struct Host<V: Payload> {
    router: Arc<EventRouter<V>>,
    events: Events<V>,
}

impl<V: Payload> Host<V> {
    /// Create a host with no combinator installed.
    pub fn new() -> Self {
        Self::from_router(Arc::new(EventRouter::new()))
    }

    /// Start building a host.
    pub fn builder() -> HostBuilder<V> {
        HostBuilder::new()
    }

    fn from_router(router: Arc<EventRouter<V>>) -> Self {
        Self {
            events: Events::new(Arc::clone(&router)),
            router,
        }
    }

    /// Install `combinator`, returning the previously installed one.
    pub fn install<C: Combinator<V>>(&self, combinator: C) -> Option<Arc<dyn Combinator<V>>> {
        self.router.install(combinator)
    }

    /// Whether a combinator has been installed.
    pub fn is_installed(&self) -> bool {
        self.router.is_installed()
    }

    /// The router shared by every object of this host.
    pub fn event_router(&self) -> &Arc<EventRouter<V>> {
        &self.router
    }

    fn events_for(&self, kind: &'static str) -> Events<V> {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(kind, "object created");
        }
        #[cfg(not(feature = "tracing"))]
        let _ = kind;
        Events::new(Arc::clone(&self.router))
    }

    /// Create a model.
    pub fn model(&self) -> Model<V> {
        Model::new(self.events_for("model"))
    }

    /// Create a collection.
    pub fn collection(&self) -> Collection<V> {
        Collection::new(self.events_for("collection"))
    }

    /// Create a router.
    pub fn router(&self) -> Router<V> {
        Router::new(self.events_for("router"))
    }

    /// Create a view.
    pub fn view(&self) -> View<V> {
        View::new(self.events_for("view"))
    }

    /// Create a history.
    pub fn history(&self) -> History<V> {
        History::new(self.events_for("history"))
    }
}

impl<V: Payload> Default for Host<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Payload> std::fmt::Debug for Host<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host")
            .field("installed", &self.router.is_installed())
            .field("events", &self.events)
            .finish()
    }
}

impl_emitter!(Host);

/// Install `combinator` on `host`.
///
/// Re-invocable: each call replaces the combinator used by every later
/// dispatch of every object created from `host`.
pub fn install<V, C>(host: &Host<V>, combinator: C)
where
    V: Payload,
    C: Combinator<V>,
{
    host.install(combinator);
}

/// Builder for [`Host`].
pub struct HostBuilder<V: Payload> {
    combinator: Option<Arc<dyn Combinator<V>>>,
}

impl<V: Payload> HostBuilder<V> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { combinator: None }
    }

    /// Install `combinator` when the host is built.
    pub fn combinator<C: Combinator<V>>(mut self, combinator: C) -> Self {
        self.combinator = Some(Arc::new(combinator));
        self
    }

    /// Build the host.
    pub fn build(self) -> Host<V> {
        let router = EventRouter::new();
        if let Some(combinator) = self.combinator {
            router.install_shared(combinator);
        }
        Host::from_router(Arc::new(router))
    }
}

impl<V: Payload> Default for HostBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
