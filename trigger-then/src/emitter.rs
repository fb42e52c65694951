//! # Emitter Mixin
//!
//! Every event-capable object exposes the same surface: `on`, `off`,
//! `trigger` and `trigger_then`. Implementors only hand out their [`Events`]
//! capability; the rest is provided.

use std::{any::Any, sync::Arc};
use trigger_then_core::{Args, BoxError, Deferred, ListenerId, Payload, Reply};
use trigger_then_std::Events;

/// The event surface shared by the host and its derived object kinds.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not emit events carrying `{V}`",
    label = "missing `Emitter` implementation",
    note = "Implement `events()` and `events_mut()` to get `on`, `trigger` and `trigger_then`."
)]
pub trait Emitter<V: Payload> {
    /// The object's events capability.
    fn events(&self) -> &Events<V>;

    /// Mutable access to the object's events capability.
    fn events_mut(&mut self) -> &mut Events<V>;

    /// Register `callback` for every whitespace-separated name in `names`.
    fn on<F>(&mut self, names: &str, callback: F) -> Vec<ListenerId>
    where
        F: Fn(&Args<V>) -> Reply<V> + Send + Sync + 'static,
    {
        self.events_mut().on(names, callback)
    }

    /// Register `callback` to be invoked with `ctx` as its receiver.
    fn on_with<C, F>(&mut self, names: &str, ctx: Arc<C>, callback: F) -> Vec<ListenerId>
    where
        C: Any + Send + Sync,
        F: Fn(&C, &Args<V>) -> Reply<V> + Send + Sync + 'static,
    {
        self.events_mut().on_with(names, ctx, callback)
    }

    /// Remove the listener with `id`.
    fn off(&mut self, id: ListenerId) -> bool {
        self.events_mut().off(id)
    }

    /// Fire `name` synchronously, discarding what listeners return.
    fn trigger<'a>(
        &self,
        name: impl Into<Option<&'a str>>,
        args: impl Into<Args<V>>,
    ) -> Result<(), BoxError> {
        self.events().trigger(name, args)
    }

    /// Dispatch `name` and aggregate every listener's reply into one
    /// deferred value.
    fn trigger_then<'a>(
        &self,
        name: impl Into<Option<&'a str>>,
        args: impl Into<Args<V>>,
    ) -> Deferred<Vec<V>> {
        self.events().trigger_then(name, args)
    }
}

/// Implements [`Emitter`] for types holding their capability in an `events`
/// field.
macro_rules! impl_emitter {
    ($($kind:ident),+ $(,)?) => {
        $(
            impl<V: trigger_then_core::Payload> $crate::emitter::Emitter<V> for $kind<V> {
                fn events(&self) -> &trigger_then_std::Events<V> {
                    &self.events
                }

                fn events_mut(&mut self) -> &mut trigger_then_std::Events<V> {
                    &mut self.events
                }
            }
        )+
    };
}

pub(crate) use impl_emitter;
