//! # Dispatch Engine
//!
//! Invokes a run of listeners with one argument tuple and collects what each
//! of them returned, in listener order.
//!
//! Every invocation is wrapped on its own: a listener that panics becomes a
//! failed reply at its index and the listeners after it still run. The same
//! applies to a deferred reply that panics while being polled.

use crate::{
    error::TriggerError,
    listener::ListenerRecord,
    payload::{Args, Payload},
    reply::Reply,
};
use std::panic::{self, AssertUnwindSafe};

/// Invokes every listener with `args` and returns their replies in order.
pub fn invoke_all<'a, V, I>(listeners: I, args: &Args<V>) -> Vec<Reply<V>>
where
    V: Payload,
    I: IntoIterator<Item = &'a ListenerRecord<V>>,
{
    listeners
        .into_iter()
        .map(|listener| invoke_one(listener, args))
        .collect()
}

fn invoke_one<V: Payload>(listener: &ListenerRecord<V>, args: &Args<V>) -> Reply<V> {
    match panic::catch_unwind(AssertUnwindSafe(|| listener.invoke(args))) {
        Ok(reply) => reply.guard_panics(),
        Err(payload) => Reply::failed(TriggerError::from_panic(payload)),
    }
}

/// Splits a name expression on runs of whitespace.
///
/// An expression without whitespace yields itself. Leading and trailing
/// whitespace produce no empty names.
pub fn split_names(expr: &str) -> Vec<&str> {
    expr.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::Deferred;
    use futures::FutureExt;
    use std::sync::{Arc, Mutex};

    fn echo() -> ListenerRecord<String> {
        ListenerRecord::new(|args: &Args<String>| {
            Reply::value(args.iter().cloned().collect::<Vec<_>>().join(","))
        })
    }

    fn settle(replies: Vec<Reply<String>>) -> Vec<Result<String, String>> {
        replies
            .into_iter()
            .map(|reply| {
                let fut: Deferred<String> = reply.into_future();
                fut.now_or_never()
                    .expect("reply should be ready")
                    .map_err(|e| e.to_string())
            })
            .collect()
    }

    #[test]
    fn test_split_names() {
        assert_eq!(split_names("change"), vec!["change"]);
        assert_eq!(split_names("a b\t c\n"), vec!["a", "b", "c"]);
        assert!(split_names("   ").is_empty());
    }

    #[test]
    fn test_invoke_all_same_behavior_across_arities() {
        let listeners = vec![echo()];
        for arity in 0..6 {
            let args: Args<String> = (0..arity).map(|i| i.to_string()).collect();
            let expected = (0..arity)
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(",");
            let results = settle(invoke_all(&listeners, &args));
            assert_eq!(results, vec![Ok(expected)], "arity {arity}");
        }
    }

    #[test]
    fn test_invoke_all_preserves_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let listeners: Vec<_> = (0..3)
            .map(|id| {
                let order = order.clone();
                ListenerRecord::<String>::new(move |_args| {
                    order.lock().unwrap().push(id);
                    Reply::value(id.to_string())
                })
            })
            .collect();

        let results = settle(invoke_all(&listeners, &Args::new()));
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
        assert_eq!(
            results,
            vec![Ok("0".to_string()), Ok("1".to_string()), Ok("2".to_string())]
        );
    }

    #[test]
    fn test_panic_is_captured_and_siblings_still_run() {
        let listeners = vec![
            ListenerRecord::<String>::new(|_args| panic!("this is a failure")),
            echo(),
        ];

        let results = settle(invoke_all(&listeners, &Args::from(["x".to_string()])));
        assert_eq!(
            results,
            vec![
                Err("listener panicked: this is a failure".to_string()),
                Ok("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_listeners() {
        let listeners: Vec<ListenerRecord<String>> = Vec::new();
        assert!(invoke_all(&listeners, &Args::new()).is_empty());
    }
}
