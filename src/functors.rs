//! Small callable values for pipeline-style code.
//!
//! | Functor | Input | Output |
//! |---|---|---|
//! | [`even`] / [`odd`] | integer | `bool` |
//! | [`pow`] | integer exponent | [`BoundPower`] |
//! | [`SQUARE`] / [`square`] | integer | `f64` |
//! | [`construct`] / [`try_construct`] | argument bundle | `T` / `Result<T, _>` |
//! | [`print`] | tuple of `Display` values | writes to stdout |
//! | [`print_to`] | `io::Write` target | [`PrintTo`] |
//!
//! Plain `fn` items (`even`, `square`, `construct::<T, _>`) slot directly into
//! iterator adapters. The curried ones return a small struct holding the bound
//! argument; that value is fixed once produced.
//!
//! ```
//! use u_kit::functors::{even, pow, square};
//!
//! let evens: Vec<i32> = (1..=6).filter(|&n| even(n)).collect();
//! assert_eq!(evens, vec![2, 4, 6]);
//!
//! let cubes: Vec<f64> = (1..=3).map(pow(3).to_fn()).collect();
//! assert_eq!(cubes, vec![1.0, 8.0, 27.0]);
//!
//! let squares: Vec<f64> = (1..=3).map(square).collect();
//! assert_eq!(squares, vec![1.0, 4.0, 9.0]);
//! ```

use std::fmt::Display;
use std::io::{self, Write};

use num_traits::{AsPrimitive, PrimInt};

// ============================================================================
// Parity
// ============================================================================

/// Returns `true` iff `value` is a multiple of two.
///
/// # Examples
/// ```
/// use u_kit::functors::even;
/// assert!(even(0));
/// assert!(even(-4_i64));
/// assert!(!even(7_u8));
/// ```
#[inline]
pub fn even<T: PrimInt>(value: T) -> bool {
    value % (T::one() + T::one()) == T::zero()
}

/// Returns `true` iff `value` is not a multiple of two.
#[inline]
pub fn odd<T: PrimInt>(value: T) -> bool {
    !even(value)
}

// ============================================================================
// Powers
// ============================================================================

/// A power operation with its exponent already bound.
///
/// Produced by [`pow`]. Applying it to an integer base yields `base^exponent`
/// as `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundPower {
    exponent: f64,
}

impl BoundPower {
    /// Binds `exponent` directly, without going through [`pow`].
    pub const fn new(exponent: f64) -> Self {
        Self { exponent }
    }

    /// The bound exponent.
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Raises `base` to the bound exponent.
    #[inline]
    pub fn apply<T: PrimInt + AsPrimitive<f64>>(&self, base: T) -> f64 {
        base.as_().powf(self.exponent)
    }

    /// Turns this functor into a closure, for `map` and friends.
    pub fn to_fn<T: PrimInt + AsPrimitive<f64>>(self) -> impl Fn(T) -> f64 + Copy {
        move |base| self.apply(base)
    }
}

/// Binds `exponent`, returning a functor that raises its input to it.
///
/// # Examples
/// ```
/// use u_kit::functors::pow;
/// let cube = pow(3);
/// assert_eq!(cube.apply(2), 8.0);
/// assert_eq!(cube.apply(-3_i64), -27.0);
/// ```
pub fn pow<E: PrimInt + AsPrimitive<f64>>(exponent: E) -> BoundPower {
    BoundPower::new(exponent.as_())
}

/// `pow(2)`, ready-made.
pub const SQUARE: BoundPower = BoundPower::new(2.0);

/// Squares `value`; same as `SQUARE.apply(value)`.
#[inline]
pub fn square<T: PrimInt + AsPrimitive<f64>>(value: T) -> f64 {
    SQUARE.apply(value)
}

// ============================================================================
// Construction
// ============================================================================

/// Builds a `T` from `args`, moving them into `T::from`.
///
/// Multiple arguments travel as a tuple, so `T` needs `From<(A, B, ..)>`.
///
/// # Examples
/// ```
/// use u_kit::functors::construct;
///
/// #[derive(Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// impl From<(i32, i32)> for Point {
///     fn from((x, y): (i32, i32)) -> Self {
///         Point { x, y }
///     }
/// }
///
/// let points: Vec<Point> = vec![(1, 2), (3, 4)].into_iter().map(construct).collect();
/// assert_eq!(points[1], Point { x: 3, y: 4 });
/// ```
#[inline]
pub fn construct<T, A>(args: A) -> T
where
    T: From<A>,
{
    T::from(args)
}

/// Fallible [`construct`]: returns whatever `T::try_from` returns.
///
/// # Errors
/// The target type's own `TryFrom::Error`, untouched.
///
/// # Examples
/// ```
/// use u_kit::functors::try_construct;
/// let ok: Result<u8, _> = try_construct(200_i32);
/// assert_eq!(ok, Ok(200));
/// let too_big: Result<u8, _> = try_construct(300_i32);
/// assert!(too_big.is_err());
/// ```
#[inline]
pub fn try_construct<T, A>(args: A) -> Result<T, T::Error>
where
    T: TryFrom<A>,
{
    T::try_from(args)
}

// ============================================================================
// Printing
// ============================================================================

/// A bundle of printable values, written back to back.
///
/// Implemented for tuples of up to eight [`Display`] values. A single value
/// is a one-tuple: `(x,)`.
pub trait PrintArgs {
    /// Writes every value in order, with no separator and no newline.
    ///
    /// # Errors
    /// Propagates the writer's error.
    fn write_args<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()>;
}

impl PrintArgs for () {
    fn write_args<W: Write + ?Sized>(&self, _out: &mut W) -> io::Result<()> {
        Ok(())
    }
}

macro_rules! impl_print_args {
    ($($name:ident),+) => {
        impl<$($name: Display),+> PrintArgs for ($($name,)+) {
            #[allow(non_snake_case)]
            fn write_args<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
                let ($($name,)+) = self;
                $( write!(out, "{}", $name)?; )+
                Ok(())
            }
        }
    };
}

impl_print_args!(A);
impl_print_args!(A, B);
impl_print_args!(A, B, C);
impl_print_args!(A, B, C, D);
impl_print_args!(A, B, C, D, E);
impl_print_args!(A, B, C, D, E, F);
impl_print_args!(A, B, C, D, E, F, G);
impl_print_args!(A, B, C, D, E, F, G, H);

/// Writes `args` to standard output, back to back.
///
/// # Errors
/// Returns the I/O error if stdout cannot be written.
///
/// # Examples
/// ```
/// use u_kit::functors::print;
/// print((1, "a", 2.5)).unwrap(); // prints `1a2.5`
/// ```
pub fn print<A: PrintArgs>(args: A) -> io::Result<()> {
    let mut out = io::stdout().lock();
    args.write_args(&mut out)?;
    out.flush()
}

/// [`print`] bound to a specific writer. Produced by [`print_to`].
#[derive(Debug)]
pub struct PrintTo<W> {
    target: W,
}

impl<W: Write> PrintTo<W> {
    /// Writes `args` to the bound target.
    ///
    /// # Errors
    /// Propagates the target's error.
    pub fn call<A: PrintArgs>(&mut self, args: A) -> io::Result<()> {
        args.write_args(&mut self.target)
    }

    /// Borrows the bound target.
    pub fn get_ref(&self) -> &W {
        &self.target
    }

    /// Unbinds and returns the target.
    pub fn into_inner(self) -> W {
        self.target
    }
}

/// Binds `target`, returning a printer that writes there instead of stdout.
///
/// # Examples
/// ```
/// use u_kit::functors::print_to;
/// let mut buf = Vec::new();
/// print_to(&mut buf).call((1, "a")).unwrap();
/// assert_eq!(buf, b"1a");
/// ```
pub fn print_to<W: Write>(target: W) -> PrintTo<W> {
    PrintTo { target }
}

// ============================================================================
// Pipe
// ============================================================================

/// Left-to-right application: `x.pipe(f)` is `f(x)`.
///
/// # Examples
/// ```
/// use u_kit::functors::{even, square, Pipe};
/// assert!(4_i32.pipe(even));
/// assert_eq!(3_i32.pipe(square), 9.0);
/// ```
pub trait Pipe: Sized {
    #[inline]
    fn pipe<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Pipe for T {}

// ============================================================================
// Tests
// ============================================================================
