//! Error types for trigger-then.
//!
//! Listener errors are carried as [`BoxError`] and pass through the
//! dispatch untouched, so callers see exactly what the listener produced.
//! [`TriggerError`] covers the failures the dispatch machinery itself
//! introduces.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by the dispatch machinery rather than by a listener.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriggerError {
    /// A listener panicked, either while being invoked or while its
    /// deferred result was being polled.
    #[error("listener panicked: {0}")]
    ListenerPanicked(String),

    /// A listener was registered with a typed context that does not match
    /// the context stored alongside it.
    #[error("listener context is not a `{expected}`")]
    ContextMismatch {
        /// Type name the listener expected as its receiver.
        expected: &'static str,
    },

    /// `trigger_then` was called before any combinator was installed.
    #[error("no combinator installed; call `install` first")]
    NotInstalled,
}

impl TriggerError {
    /// Builds a [`TriggerError::ListenerPanicked`] from a `catch_unwind` payload.
    pub fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        TriggerError::ListenerPanicked(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_panic_str() {
        let err = TriggerError::from_panic(Box::new("boom"));
        assert_eq!(err, TriggerError::ListenerPanicked("boom".into()));
        assert_eq!(err.to_string(), "listener panicked: boom");
    }

    #[test]
    fn test_from_panic_string() {
        let err = TriggerError::from_panic(Box::new(String::from("formatted 42")));
        assert_eq!(err, TriggerError::ListenerPanicked("formatted 42".into()));
    }

    #[test]
    fn test_from_panic_opaque() {
        let err = TriggerError::from_panic(Box::new(7_u32));
        assert_eq!(
            err,
            TriggerError::ListenerPanicked("unknown panic payload".into())
        );
    }
}
