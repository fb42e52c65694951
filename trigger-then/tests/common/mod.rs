#![allow(dead_code)]

use serde_json::Value;
use std::time::Duration;
use trigger_then::{Host, Reply, combinators::ConcurrentAll};

// ============================================================================
// Hosts
// ============================================================================

/// A host with the concurrent combinator installed.
pub fn installed_host() -> Host<Value> {
    Host::builder().combinator(ConcurrentAll).build()
}

// ============================================================================
// Replies
// ============================================================================

/// A reply that resolves to `value` after `millis` milliseconds.
pub fn delayed(millis: u64, value: Value) -> Reply<Value> {
    Reply::deferred(async move {
        tokio::time::sleep(Duration::from_millis(millis)).await;
        Ok(value)
    })
}

/// A reply that rejects with `message` after `millis` milliseconds.
pub fn delayed_failure(millis: u64, message: &'static str) -> Reply<Value> {
    Reply::deferred(async move {
        tokio::time::sleep(Duration::from_millis(millis)).await;
        Err(message.into())
    })
}

/// Reads a millisecond delay out of a JSON argument.
pub fn millis(value: Option<&Value>) -> u64 {
    value.and_then(Value::as_u64).unwrap_or(0)
}
