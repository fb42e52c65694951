//! # trigger-then-core
//!
//! Core vocabulary for dispatching events to listeners and aggregating what
//! the listeners return into a single deferred value.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! host object models and combinator implementations that don't need the
//! full `trigger-then-std` implementation.
//!
//! # Building Blocks
//!
//! ## Listener records ([`ListenerRecord`])
//!
//! A callback plus the [`Context`] it is invoked with. Records live in the
//! host's registry and are only borrowed during a dispatch.
//!
//! ## Replies ([`Reply`])
//!
//! What one listener returned: a plain value, a [`Deferred`] value that
//! settles later, or a synchronous failure.
//!
//! ## Dispatch engine ([`invoke_all`])
//!
//! Invokes a run of listeners with one [`Args`] tuple and collects their
//! replies in order. Panics are captured per listener.
//!
//! ## Combinators ([`Combinator`])
//!
//! Reduce the collected replies into one deferred value that resolves when
//! all of them do, or rejects on the first failure.
//!
//! # Error Types
//!
//! - [`BoxError`] - Rejection type; listener errors pass through unchanged
//! - [`TriggerError`] - Failures introduced by the dispatch itself

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod combinator;
mod dispatch;
mod error;
mod listener;
mod payload;
mod provider;
mod reply;

// Re-exports
pub use combinator::Combinator;
pub use dispatch::{invoke_all, split_names};
pub use error::{BoxError, TriggerError};
pub use listener::{Callback, Context, ListenerId, ListenerRecord};
pub use payload::{Args, Payload};
pub use provider::{ALL_EVENTS, ListenerProvider};
pub use reply::{Deferred, Reply};
