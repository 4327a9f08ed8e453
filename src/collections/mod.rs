//! Collect any sequence into a caller-chosen container.
//!
//! [`collect_into`] (or the pipe-style [`CollectInto::to`]) builds an empty
//! target, then inserts every source element once, in source order, through
//! the target's [`Insertable`] capability.
//!
//! ```
//! use std::collections::{BTreeSet, VecDeque};
//! use u_kit::collections::CollectInto;
//!
//! let queue: VecDeque<i32> = (1..=3).to();
//! assert_eq!(queue, [1, 2, 3]);
//!
//! let words: BTreeSet<&str> = ["b", "a", "b"].to();
//! assert_eq!(words.len(), 2);
//! ```
//!
//! The source's lower size hint is passed to [`Insertable::reserve_items`]
//! first, so growable targets allocate once. Content and order are the same
//! as plain one-by-one insertion.

mod insertable;

pub use insertable::Insertable;

/// Fills a fresh `C` with every element of `source`, in order.
///
/// # Complexity
/// One pass over `source`; each element is moved into `C` exactly once.
///
/// # Examples
/// ```
/// use u_kit::collections::collect_into;
/// let v: Vec<char> = collect_into("abc".chars());
/// assert_eq!(v, vec!['a', 'b', 'c']);
/// ```
pub fn collect_into<C, I>(source: I) -> C
where
    I: IntoIterator,
    C: Insertable<I::Item>,
{
    let iter = source.into_iter();
    let mut container = C::default();
    let (lower, _) = iter.size_hint();
    container.reserve_items(lower);
    for item in iter {
        container.insert_item(item);
    }
    container
}

/// Pipe-style [`collect_into`]: `source.to::<C>()`.
pub trait CollectInto: IntoIterator + Sized {
    #[inline]
    fn to<C>(self) -> C
    where
        C: Insertable<Self::Item>,
    {
        collect_into(self)
    }
}

impl<I: IntoIterator> CollectInto for I {}
