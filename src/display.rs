//! Bracketed, comma-separated display for any sequence.
//!
//! `[1,2,3]`: no spaces, no trailing comma, `[]` when empty. The wrapper is
//! opt-in, so `String` and `&str` keep their normal `Display`; `str` itself
//! is not iterable and can never be wrapped.
//!
//! ```
//! use u_kit::display::{seq, DisplaySeq};
//!
//! assert_eq!(seq(&[1, 2, 3]).to_string(), "[1,2,3]");
//! assert_eq!(vec!["a", "b"].display_seq().to_string(), "[a,b]");
//! assert_eq!(format!("{}", seq(&Vec::<i32>::new())), "[]");
//! ```

use std::fmt;

/// Borrowing `Display` adapter for a sequence. See [`seq`].
///
/// Formatting walks the sequence once, read-only.
pub struct SeqDisplay<'a, S: ?Sized> {
    items: &'a S,
}

impl<'a, S: ?Sized> Clone for SeqDisplay<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: ?Sized> Copy for SeqDisplay<'a, S> {}

impl<'a, S> fmt::Display for SeqDisplay<'a, S>
where
    S: ?Sized,
    &'a S: IntoIterator,
    <&'a S as IntoIterator>::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.items.into_iter();
        f.write_str("[")?;
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for item in iter {
                write!(f, ",{item}")?;
            }
        }
        f.write_str("]")
    }
}

impl<'a, S> fmt::Debug for SeqDisplay<'a, S>
where
    S: ?Sized,
    &'a S: IntoIterator,
    <&'a S as IntoIterator>::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Wraps `items` for display as `[a,b,c]`.
#[inline]
pub fn seq<S: ?Sized>(items: &S) -> SeqDisplay<'_, S> {
    SeqDisplay { items }
}

/// Method form of [`seq`], available on every sized type.
///
/// Only displayable when `&Self` iterates over `Display` items.
pub trait DisplaySeq {
    fn display_seq(&self) -> SeqDisplay<'_, Self> {
        seq(self)
    }
}

impl<T> DisplaySeq for T {}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn matches_join(data in proptest::collection::vec(any::<i64>(), 0..40)) {
            let joined: Vec<String> = data.iter().map(|x| x.to_string()).collect();
            let expected = format!("[{}]", joined.join(","));
            prop_assert_eq!(seq(&data).to_string(), expected);
        }
    }
}
