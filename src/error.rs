//! Error types for the toolkit.
//!
//! Only generator access can fail at runtime. Construction failures from
//! [`try_construct`](crate::functors::try_construct) and writer failures from
//! [`print_to`](crate::functors::print_to) keep their own error types.

use thiserror::Error;

/// Failure to obtain a seeded generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// The operating system entropy source reported an error.
    #[error("entropy source unavailable: {0}")]
    Unavailable(String),

    /// A finite entropy source ran out before the seed block was filled.
    #[error("entropy source exhausted: requested {requested} bytes, {available} available")]
    Exhausted { requested: usize, available: usize },

    /// The thread-local engine was requested while already lent out on this
    /// thread.
    #[error("thread-local engine is already in use on this thread")]
    EngineInUse,
}
