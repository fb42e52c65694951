//! # Events Capability
//!
//! The per-object event surface: register listeners, remove them, fire
//! events synchronously, or dispatch them and get one deferred value back
//! for everything the listeners returned.
//!
//! Every object created from the same host shares that host's
//! [`EventRouter`], so installing a different combinator affects all of them
//! at once without re-registering anything.
//!
//! # Example
//!
//! ```rust,ignore
//! let router = Arc::new(EventRouter::with_combinator(ConcurrentAll));
//! let mut events = Events::new(router);
//!
//! events.on("fireEvent", |args| Reply::value(args[0].clone()));
//! let values = events.trigger_then("fireEvent", [json!(50)]).await?;
//! assert_eq!(values, vec![json!(50)]);
//! ```

use crate::{registry::Registry, router::EventRouter};
use std::{any::Any, sync::Arc};
use trigger_then_core::{
    Args, BoxError, Deferred, ListenerId, ListenerRecord, Payload, Reply, split_names,
};

/// Listener registry plus dispatch for one object.
pub struct Events<V: Payload> {
    registry: Option<Registry<V>>,
    router: Arc<EventRouter<V>>,
}

impl<V: Payload> Events<V> {
    /// Create an events capability dispatching through `router`.
    ///
    /// No registry exists until the first listener is registered.
    pub fn new(router: Arc<EventRouter<V>>) -> Self {
        Self {
            registry: None,
            router,
        }
    }

    /// The router this capability dispatches through.
    pub fn router(&self) -> &Arc<EventRouter<V>> {
        &self.router
    }

    /// The listener registry, if anything was ever registered.
    pub fn registry(&self) -> Option<&Registry<V>> {
        self.registry.as_ref()
    }

    /// Register `callback` for every whitespace-separated name in `names`.
    ///
    /// Returns one id per name, in the order the names were given.
    pub fn on<F>(&mut self, names: &str, callback: F) -> Vec<ListenerId>
    where
        F: Fn(&Args<V>) -> Reply<V> + Send + Sync + 'static,
    {
        self.register(names, ListenerRecord::new(callback))
    }

    /// Register `callback` with `ctx` as its receiver.
    pub fn on_with<C, F>(&mut self, names: &str, ctx: Arc<C>, callback: F) -> Vec<ListenerId>
    where
        C: Any + Send + Sync,
        F: Fn(&C, &Args<V>) -> Reply<V> + Send + Sync + 'static,
    {
        self.register(names, ListenerRecord::with_context(ctx, callback))
    }

    fn register(&mut self, names: &str, template: ListenerRecord<V>) -> Vec<ListenerId> {
        let names = split_names(names);
        if names.is_empty() {
            return Vec::new();
        }

        let registry = self.registry.get_or_insert_with(Registry::new);
        names
            .into_iter()
            .map(|name| {
                let record = ListenerRecord::from_parts(
                    Arc::clone(template.callback()),
                    template.context().clone(),
                );
                registry.insert(name, record)
            })
            .collect()
    }

    /// Remove the listener with `id`.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.registry
            .as_mut()
            .is_some_and(|registry| registry.remove(id))
    }

    /// Remove every listener for `name`.
    pub fn off_event(&mut self, name: &str) -> usize {
        self.registry
            .as_mut()
            .map_or(0, |registry| registry.remove_event(name))
    }

    /// Remove all listeners and drop the registry.
    pub fn clear(&mut self) {
        self.registry = None;
    }

    /// Whether any listener is registered.
    pub fn has_listeners(&self) -> bool {
        self.registry
            .as_ref()
            .is_some_and(|registry| !registry.is_empty())
    }

    /// Number of listeners registered for `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.registry
            .as_ref()
            .map_or(0, |registry| registry.listener_count(name))
    }

    /// Fire `name` synchronously, discarding what listeners return.
    ///
    /// Returns the first synchronous listener failure, if any.
    pub fn trigger<'a>(
        &self,
        name: impl Into<Option<&'a str>>,
        args: impl Into<Args<V>>,
    ) -> Result<(), BoxError> {
        self.router
            .fire(self.registry.as_ref(), name.into(), args.into())
    }

    /// Dispatch `name` and aggregate every listener's reply.
    ///
    /// Resolves to the listeners' values, named listeners first and
    /// catch-all listeners last. Rejects with the first failure, whether a
    /// listener failed synchronously, panicked or returned a deferred value
    /// that rejected.
    pub fn trigger_then<'a>(
        &self,
        name: impl Into<Option<&'a str>>,
        args: impl Into<Args<V>>,
    ) -> Deferred<Vec<V>> {
        self.router
            .dispatch(self.registry.as_ref(), name.into(), args.into())
    }
}

impl<V: Payload> std::fmt::Debug for Events<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Events")
            .field("listeners", &self.registry.as_ref().map_or(0, Registry::len))
            .field("installed", &self.router.is_installed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::ConcurrentAll;
    use serde_json::{Value, json};

    fn events() -> Events<Value> {
        Events::new(Arc::new(EventRouter::with_combinator(ConcurrentAll)))
    }

    #[test]
    fn test_registry_is_lazy() {
        let mut events = events();
        assert!(events.registry().is_none());
        assert!(events.on("   ", |_args| Reply::value(Value::Null)).is_empty());
        assert!(events.registry().is_none());

        events.on("change", |_args| Reply::value(Value::Null));
        assert!(events.has_listeners());
    }

    #[test]
    fn test_on_multiple_names() {
        let mut events = events();
        let ids = events.on("add remove", |_args| Reply::value(Value::Null));
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
        assert_eq!(events.listener_count("add"), 1);
        assert_eq!(events.listener_count("remove"), 1);

        assert!(events.off(ids[0]));
        assert_eq!(events.listener_count("add"), 0);
        assert_eq!(events.off_event("remove"), 1);
        assert!(!events.has_listeners());
    }

    #[tokio::test]
    async fn test_clear_drops_registry() {
        let mut events = events();
        events.on("x", |_args| Reply::value(json!(1)));
        events.clear();
        assert!(events.registry().is_none());

        let values = events.trigger_then("x", ()).await.unwrap();
        assert!(values.is_empty());
    }

    #[tokio::test]
    async fn test_trigger_then_values() {
        let mut events = events();
        events.on("fireEvent", |args| Reply::value(args[0].clone()));
        events.on("fireEvent", |_args| {
            Reply::deferred(async { Ok(json!("This is a deferred object")) })
        });

        let values = events.trigger_then("fireEvent", [json!(50)]).await.unwrap();
        assert_eq!(values, vec![json!(50), json!("This is a deferred object")]);
    }

    #[test]
    fn test_trigger_sync() {
        let mut events = events();
        events.on("ok", |_args| Reply::value(Value::Null));
        events.on("bad", |_args| Reply::failed("this is a failure"));

        assert!(events.trigger("ok", ()).is_ok());
        let err = events.trigger("bad", ()).unwrap_err();
        assert_eq!(err.to_string(), "this is a failure");
    }
}
