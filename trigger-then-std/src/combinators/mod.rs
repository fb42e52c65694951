//! Standard combinator implementations.
//!
//! | Combinator | Settles replies | Rejects with |
//! |------------|-----------------|--------------|
//! | [`ConcurrentAll`] | All polled together | First failure to happen |
//! | [`SequentialAll`] | One after another, in order | First failure in order |
//! | [`TracingCombinator`] | As the wrapped combinator | As the wrapped combinator |

pub mod concurrent;
pub mod sequential;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use concurrent::ConcurrentAll;
pub use sequential::SequentialAll;
#[cfg(feature = "tracing")]
pub use self::tracing::TracingCombinator;
