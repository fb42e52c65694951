//! # Event Router
//!
//! Resolves which listeners a name expression reaches, runs them through the
//! dispatch engine and hands the collected replies to the installed
//! combinator.
//!
//! # Listener Order
//!
//! 1. Listeners of each requested name, names in the order given, each
//!    name's listeners in registration order. They receive the positional
//!    arguments only.
//! 2. Catch-all listeners (registered under
//!    [`ALL_EVENTS`](trigger_then_core::ALL_EVENTS)), in registration
//!    order. They receive the name expression as their first argument.
//!
//! The aggregate resolves to the replies' values in that same order.
//!
//! # Combinator Binding
//!
//! The router owns the combinator binding. [`EventRouter::install`] swaps it
//! and every later dispatch uses the new one. The binding is read once per
//! dispatch, before any listener runs; a swap racing with a dispatch on
//! another thread may or may not be observed by that dispatch.

use futures::{FutureExt, future};
use parking_lot::RwLock;
use std::sync::Arc;
use trigger_then_core::{
    Args, BoxError, Combinator, Deferred, ListenerProvider, ListenerRecord, Payload, Reply,
    TriggerError, invoke_all, split_names,
};

/// The event router: listener resolution plus the swappable combinator.
pub struct EventRouter<V: Payload> {
    combinator: RwLock<Option<Arc<dyn Combinator<V>>>>,
}

impl<V: Payload> EventRouter<V> {
    /// Create a router with no combinator installed.
    pub fn new() -> Self {
        Self {
            combinator: RwLock::new(None),
        }
    }

    /// Create a router with `combinator` already installed.
    pub fn with_combinator<C: Combinator<V>>(combinator: C) -> Self {
        Self {
            combinator: RwLock::new(Some(Arc::new(combinator))),
        }
    }

    /// Install `combinator`, returning the previously installed one.
    pub fn install<C: Combinator<V>>(&self, combinator: C) -> Option<Arc<dyn Combinator<V>>> {
        self.install_shared(Arc::new(combinator))
    }

    /// Install an already shared combinator, returning the previous one.
    pub fn install_shared(
        &self,
        combinator: Arc<dyn Combinator<V>>,
    ) -> Option<Arc<dyn Combinator<V>>> {
        let previous = self.combinator.write().replace(combinator);
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(swapped = previous.is_some(), "combinator installed");
        }
        previous
    }

    /// Whether a combinator has been installed.
    pub fn is_installed(&self) -> bool {
        self.combinator.read().is_some()
    }

    /// The currently installed combinator.
    pub fn combinator(&self) -> Option<Arc<dyn Combinator<V>>> {
        self.combinator.read().clone()
    }

    /// Dispatch `name` with `args`, aggregating every listener's reply.
    ///
    /// - No provider (nothing ever registered): resolves to an empty list.
    /// - No name: no listener runs, resolves to an empty list.
    /// - Otherwise named listeners then catch-all listeners run, and their
    ///   replies go to the installed combinator.
    ///
    /// Rejects with [`TriggerError::NotInstalled`] if no combinator was
    /// ever installed.
    pub fn dispatch<P>(
        &self,
        provider: Option<&P>,
        name: Option<&str>,
        args: Args<V>,
    ) -> Deferred<Vec<V>>
    where
        P: ListenerProvider<V> + ?Sized,
    {
        let Some(combinator) = self.combinator() else {
            let err: BoxError = TriggerError::NotInstalled.into();
            return future::ready(Err(err)).boxed();
        };
        let (Some(provider), Some(name)) = (provider, name) else {
            return combinator.all(Vec::new());
        };

        let replies = collect_replies(provider, name, &args);
        combinator.all(replies)
    }

    /// Synchronously fire `name` with `args`, discarding replies.
    ///
    /// Listener resolution and order match [`dispatch`](Self::dispatch).
    /// Returns the first synchronous failure among the replies. Deferred
    /// replies are dropped without being polled.
    pub fn fire<P>(
        &self,
        provider: Option<&P>,
        name: Option<&str>,
        args: Args<V>,
    ) -> Result<(), BoxError>
    where
        P: ListenerProvider<V> + ?Sized,
    {
        let (Some(provider), Some(name)) = (provider, name) else {
            return Ok(());
        };

        for reply in collect_replies(provider, name, &args) {
            if let Reply::Failed(err) = reply {
                return Err(err);
            }
        }
        Ok(())
    }
}

impl<V: Payload> Default for EventRouter<V> {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_replies<V, P>(provider: &P, name: &str, args: &Args<V>) -> Vec<Reply<V>>
where
    V: Payload,
    P: ListenerProvider<V> + ?Sized,
{
    let named: Vec<&ListenerRecord<V>> = split_names(name)
        .into_iter()
        .flat_map(|event| provider.resolve(event))
        .collect();
    let catch_all = provider.resolve_all();

    #[cfg(feature = "tracing")]
    {
        tracing::trace!(
            event = name,
            named = named.len(),
            catch_all = catch_all.len(),
            args = args.len(),
            "dispatching event"
        );
    }

    let mut replies = invoke_all(named, args);
    if !catch_all.is_empty() {
        let full_args = args.prepend(V::from(name.to_owned()));
        replies.extend(invoke_all(catch_all, &full_args));
    }
    replies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{combinators::ConcurrentAll, registry::Registry};
    use std::sync::Mutex;

    type Calls = Arc<Mutex<Vec<(String, Vec<String>)>>>;

    fn recorder(registry: &mut Registry<String>, name: &str, tag: &'static str, calls: &Calls) {
        let calls = calls.clone();
        registry.insert(
            name,
            ListenerRecord::new(move |args: &Args<String>| {
                calls
                    .lock()
                    .unwrap()
                    .push((tag.to_string(), args.iter().cloned().collect()));
                Reply::value(tag.to_string())
            }),
        );
    }

    #[tokio::test]
    async fn test_not_installed_rejects() {
        let router = EventRouter::<String>::new();
        let registry = Registry::new();
        let err = router
            .dispatch(Some(&registry), Some("x"), Args::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), TriggerError::NotInstalled.to_string());
    }

    #[tokio::test]
    async fn test_no_provider_resolves_empty() {
        let router = EventRouter::<String>::with_combinator(ConcurrentAll);
        let values = router
            .dispatch::<Registry<String>>(None, Some("x"), Args::new())
            .await
            .unwrap();
        assert!(values.is_empty());
    }

    #[tokio::test]
    async fn test_named_then_catch_all() {
        let calls = Calls::default();
        let mut registry = Registry::new();
        recorder(&mut registry, "all", "catch", &calls);
        recorder(&mut registry, "e2", "second", &calls);
        recorder(&mut registry, "e1", "first", &calls);

        let router = EventRouter::with_combinator(ConcurrentAll);
        let values = router
            .dispatch(Some(&registry), Some("e1 e2"), Args::from(["5".to_string()]))
            .await
            .unwrap();

        assert_eq!(values, vec!["first", "second", "catch"]);
        let calls = calls.lock().unwrap();
        assert_eq!(calls[0], ("first".to_string(), vec!["5".to_string()]));
        assert_eq!(calls[1], ("second".to_string(), vec!["5".to_string()]));
        assert_eq!(
            calls[2],
            ("catch".to_string(), vec!["e1 e2".to_string(), "5".to_string()])
        );
    }

    #[tokio::test]
    async fn test_absent_name_runs_nothing() {
        let calls = Calls::default();
        let mut registry = Registry::new();
        recorder(&mut registry, "all", "catch", &calls);

        let router = EventRouter::with_combinator(ConcurrentAll);
        let values = router
            .dispatch(Some(&registry), None, Args::new())
            .await
            .unwrap();

        assert!(values.is_empty());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_install_swaps_combinator() {
        let router = EventRouter::<String>::new();
        assert!(!router.is_installed());
        assert!(router.install(ConcurrentAll).is_none());
        assert!(router.install(crate::combinators::SequentialAll).is_some());
        assert!(router.is_installed());
    }

    #[test]
    fn test_fire_reports_first_failure() {
        let mut registry = Registry::<String>::new();
        registry.insert("x", ListenerRecord::new(|_args| Reply::value("ok".into())));
        registry.insert(
            "x",
            ListenerRecord::new(|_args| Reply::failed("this is a failure")),
        );

        let router = EventRouter::<String>::new();
        let err = router
            .fire(Some(&registry), Some("x"), Args::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "this is a failure");
        assert!(router.fire(Some(&registry), Some("y"), Args::new()).is_ok());
    }
}
