//! The insertion capability a container needs to be a collect target.
//!
//! One canonical method, [`Insertable::insert_item`], stands in for whatever
//! the container calls it (`push`, `push_back`, `insert`, `push_str`).
//! Standard collections are covered here; user containers implement the
//! trait themselves.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

/// A container that can be built empty and grown one item at a time.
///
/// # Examples
/// ```
/// use u_kit::collections::{CollectInto, Insertable};
///
/// #[derive(Default)]
/// struct Tally {
///     total: i64,
///     count: usize,
/// }
///
/// impl Insertable<i64> for Tally {
///     fn insert_item(&mut self, item: i64) {
///         self.total += item;
///         self.count += 1;
///     }
/// }
///
/// let t: Tally = vec![3, 4, 5].to();
/// assert_eq!((t.total, t.count), (12, 3));
/// ```
///
/// A type without the capability is rejected at compile time:
///
/// ```compile_fail
/// use u_kit::collections::CollectInto;
///
/// #[derive(Default)]
/// struct Opaque;
///
/// let _: Opaque = vec![1, 2, 3].to();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be filled with items of type `{E}`",
    label = "no add/append/insert capability for `{E}`",
    note = "implement `Insertable<{E}>` for `{Self}` to give it an insertion method"
)]
pub trait Insertable<E>: Default {
    /// Adds one item at the container's natural insertion point.
    fn insert_item(&mut self, item: E);

    /// Capacity hint before a run of insertions. No-op by default.
    #[inline]
    fn reserve_items(&mut self, additional: usize) {
        let _ = additional;
    }
}

impl<T> Insertable<T> for Vec<T> {
    #[inline]
    fn insert_item(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    fn reserve_items(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T> Insertable<T> for VecDeque<T> {
    #[inline]
    fn insert_item(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn reserve_items(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T> Insertable<T> for LinkedList<T> {
    #[inline]
    fn insert_item(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T: Ord> Insertable<T> for BinaryHeap<T> {
    #[inline]
    fn insert_item(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    fn reserve_items(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T, S> Insertable<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn insert_item(&mut self, item: T) {
        self.insert(item);
    }

    #[inline]
    fn reserve_items(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T: Ord> Insertable<T> for BTreeSet<T> {
    #[inline]
    fn insert_item(&mut self, item: T) {
        self.insert(item);
    }
}

impl<K, V, S> Insertable<(K, V)> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn insert_item(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }

    #[inline]
    fn reserve_items(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<K: Ord, V> Insertable<(K, V)> for BTreeMap<K, V> {
    #[inline]
    fn insert_item(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl Insertable<char> for String {
    #[inline]
    fn insert_item(&mut self, item: char) {
        self.push(item);
    }

    #[inline]
    fn reserve_items(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<'a> Insertable<&'a str> for String {
    #[inline]
    fn insert_item(&mut self, item: &'a str) {
        self.push_str(item);
    }
}

impl Insertable<String> for String {
    #[inline]
    fn insert_item(&mut self, item: String) {
        self.push_str(&item);
    }
}
