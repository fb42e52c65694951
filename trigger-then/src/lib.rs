//! # trigger-then - Aggregating Event Dispatch
//!
//! `trigger-then` adds `trigger_then` to an event-capable object model: the
//! same dispatch as `trigger`, except that what every listener returns is
//! collected and reduced into **one deferred value**. It resolves to the
//! listeners' values in order, or rejects with the first failure.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trigger_then::prelude::*;
//!
//! let host = Host::<Value>::new();
//! install(&host, ConcurrentAll);
//!
//! let mut model = host.model();
//! model.on("fireEvent", |args| Reply::value(args[0].clone()));
//! model.on("fireEvent", |_args| {
//!     Reply::deferred(async {
//!         tokio::time::sleep(Duration::from_millis(50)).await;
//!         Ok(json!("done"))
//!     })
//! });
//!
//! let values = model.trigger_then("fireEvent", [json!(50)]).await?;
//! assert_eq!(values, vec![json!(50), json!("done")]);
//! ```
//!
//! ## Listener Order
//!
//! Listeners of each requested name run first, in the order the names were
//! given, then listeners registered under [`ALL_EVENTS`]. Catch-all
//! listeners receive the name expression as their first argument.
//!
//! ## Failures
//!
//! A listener that fails synchronously or panics never aborts the dispatch:
//! its failure becomes a rejected reply, and the aggregate rejects with it.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod emitter;
mod host;
mod kinds;

pub use emitter::Emitter;
pub use host::{Host, HostBuilder, install};
pub use kinds::{Collection, History, Model, Router, View};

pub use trigger_then_core::{
    // Listener providers
    ALL_EVENTS,
    // Payload
    Args,
    // Errors
    BoxError,
    // Listener records
    Callback,
    // Combinator
    Combinator,
    Context,
    // Replies
    Deferred,
    ListenerId,
    ListenerProvider,
    ListenerRecord,
    Payload,
    Reply,
    TriggerError,
    // Dispatch engine
    invoke_all,
    split_names,
};

pub use trigger_then_std::{EventRouter, Events, Registry};

/// Stock combinators.
pub mod combinators {
    #![allow(clippy::wildcard_imports)]
    pub use trigger_then_std::combinators::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use trigger_then_std::testing::*;
}

/// Prelude module - common imports for trigger-then.
///
/// # Usage
///
/// ```rust,ignore
/// use trigger_then::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Replies
        Args,
        // Errors
        BoxError,
        // Core traits
        Combinator,
        Deferred,
        Emitter,
        // Host
        Host,
        Payload,
        Reply,
        TriggerError,
        combinators::{ConcurrentAll, SequentialAll},
        install,
    };
}
