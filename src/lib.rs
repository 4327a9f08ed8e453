//! # u-kit
//!
//! Small building blocks for pipeline-style Rust.
//!
//! This crate collects the little helpers that keep showing up in glue code:
//! a properly seeded generator per thread, callable values that drop straight
//! into iterator chains, a collect adapter for any container, and a compact
//! display for sequences. It knows nothing about any consumer domain.
//!
//! ## Modules
//!
//! - [`random`] — Per-thread seeded engine and explicit [`random::RngContext`]
//! - [`functors`] — `even`, `pow`/`square`, `construct`, `print`/`print_to`, `Pipe`
//! - [`collections`] — [`collections::Insertable`] targets and `source.to::<C>()`
//! - [`display`] — `[a,b,c]` formatting for any iterable
//! - [`error`] — [`EntropyError`]
//!
//! ## Example
//!
//! ```
//! use u_kit::prelude::*;
//!
//! let squares: Vec<f64> = (1..=6).filter(|&n| even(n)).map(square).to();
//! assert_eq!(seq(&squares).to_string(), "[4,16,36]");
//! ```
//!
//! ## Design Philosophy
//!
//! - **Seed once, never reseed**: every generator is built from a full seed
//!   block and then left alone
//! - **Capabilities are traits**: a container is a collect target because it
//!   implements [`collections::Insertable`], checked at compile time
//! - **Property-based testing**: invariants verified via proptest

pub mod collections;
pub mod display;
pub mod error;
pub mod functors;
pub mod random;

pub use error::EntropyError;

/// Everything needed for pipeline-style use in one import.
pub mod prelude {
    pub use crate::collections::{collect_into, CollectInto, Insertable};
    pub use crate::display::{seq, DisplaySeq};
    pub use crate::error::EntropyError;
    pub use crate::functors::{
        construct, even, odd, pow, print, print_to, square, try_construct, BoundPower, Pipe,
        PrintTo, SQUARE,
    };
    pub use crate::random::{random, random_range, with_engine, Engine, RngContext};
}
