//! # trigger-then-std
//!
//! Standard implementations for trigger-then.
//!
//! This crate provides:
//! - **Registry**: [`Registry`], host-owned listener storage keyed by name
//! - **Routing**: [`EventRouter`], listener resolution plus the swappable
//!   combinator binding
//! - **Events**: [`Events`], the per-object `on`/`off`/`trigger`/`trigger_then` surface
//! - **Combinators**: [`ConcurrentAll`], [`SequentialAll`] and, with the
//!   `tracing` feature, `TracingCombinator`
//! - **Testing**: call logs and recording combinators

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use trigger_then_core;

// Modules
pub mod combinators;
pub mod events;
pub mod registry;
pub mod router;
pub mod testing;

pub use combinators::{ConcurrentAll, SequentialAll};
pub use events::Events;
pub use registry::Registry;
pub use router::EventRouter;
