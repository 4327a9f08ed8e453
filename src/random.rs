//! Seeded random number generation, per thread or per task.
//!
//! Two ways to get a generator:
//!
//! - The **thread-local engine** ([`with_engine`], [`random`],
//!   [`random_range`]): each thread lazily seeds its own [`Engine`] from the
//!   operating system on first use and keeps it until the thread exits.
//! - An explicit **context** ([`RngContext`]) that the caller owns and passes
//!   to whatever needs randomness.
//!
//! Either way the seed block is exactly the size of the generator's
//! [`SeedableRng::Seed`] and is filled from an [`EntropySource`] in a single
//! call. Generators are never re-seeded.
//!
//! # Reproducibility
//!
//! For reproducible experiments, use [`RngContext::seeded`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.
//!
//! Nothing here is suitable for cryptographic use.

use std::cell::{Cell, RefCell};

use rand::distr::uniform::{SampleRange, SampleUniform};
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::{OsRng, SmallRng};
use rand::{Rng, RngCore, SeedableRng, TryRngCore};
use tracing::{debug, warn};

use crate::error::EntropyError;

/// The default generator: `SmallRng` (Xoshiro256++ on 64-bit targets).
pub type Engine = SmallRng;

// ============================================================================
// Entropy sources
// ============================================================================

/// A source of seed material.
///
/// Implementations fill the whole of `dest` or fail; a partially filled
/// buffer is never used as a seed.
pub trait EntropySource {
    /// Fills `dest` completely with entropy.
    ///
    /// # Errors
    /// Returns [`EntropyError`] if the source cannot supply `dest.len()` bytes.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// The operating system entropy source (`getrandom` and friends, via
/// [`rand::rngs::OsRng`]).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|err| EntropyError::Unavailable(err.to_string()))
    }
}

/// A finite pool of recorded bytes, consumed from the front.
///
/// Useful for replaying a captured seed.
///
/// # Examples
/// ```
/// use u_kit::random::RngContext;
/// let recorded = [7_u8; 64];
/// let mut pool: &[u8] = &recorded;
/// let _ctx: RngContext = RngContext::from_source(&mut pool).unwrap();
/// assert!(pool.len() < 64);
/// ```
impl<'a> EntropySource for &'a [u8] {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let bytes: &'a [u8] = *self;
        if bytes.len() < dest.len() {
            return Err(EntropyError::Exhausted {
                requested: dest.len(),
                available: bytes.len(),
            });
        }
        let (head, tail) = bytes.split_at(dest.len());
        dest.copy_from_slice(head);
        *self = tail;
        Ok(())
    }
}

/// Size in bytes of the seed block `R` is built from.
pub fn seed_len<R: SeedableRng>() -> usize {
    R::Seed::default().as_ref().len()
}

/// Builds a generator whose whole seed comes from `source`.
///
/// The seed block is `R::Seed`, so its size always matches what the
/// generator needs. `source` is asked exactly once.
///
/// # Errors
/// Propagates the source's [`EntropyError`] unchanged.
///
/// # Examples
/// ```
/// use u_kit::random::{seed_generator, Engine, OsEntropy};
/// use rand::Rng;
/// let mut rng: Engine = seed_generator(&mut OsEntropy).unwrap();
/// let x: f64 = rng.random();
/// assert!((0.0..1.0).contains(&x));
/// ```
pub fn seed_generator<R, S>(source: &mut S) -> Result<R, EntropyError>
where
    R: SeedableRng,
    S: EntropySource + ?Sized,
{
    let mut seed = R::Seed::default();
    source.fill(seed.as_mut())?;
    Ok(R::from_seed(seed))
}

// ============================================================================
// Thread-local engine
// ============================================================================

thread_local! {
    static ENGINE: RefCell<Option<Engine>> = const { RefCell::new(None) };
    static SEEDINGS: Cell<usize> = const { Cell::new(0) };
}

fn seed_thread_engine<S: EntropySource + ?Sized>(source: &mut S) -> Result<Engine, EntropyError> {
    let engine = seed_generator::<Engine, _>(source).inspect_err(|err| {
        warn!(thread = ?std::thread::current().id(), %err, "failed to seed thread-local engine");
    })?;
    SEEDINGS.with(|n| n.set(n.get() + 1));
    debug!(
        thread = ?std::thread::current().id(),
        seed_bytes = seed_len::<Engine>(),
        "seeded thread-local engine"
    );
    Ok(engine)
}

/// Runs `f` with this thread's engine, seeding it on first use.
///
/// The engine is created the first time a thread calls this and lives
/// until that thread exits. Later calls get the same engine, continuing its
/// stream.
///
/// # Errors
/// - [`EntropyError::Unavailable`] if the operating system cannot provide
///   entropy. Nothing is stored; the next call on the thread tries again.
/// - [`EntropyError::EngineInUse`] if called from inside another
///   `with_engine` closure on the same thread.
///
/// # Examples
/// ```
/// use u_kit::random::with_engine;
/// use rand::Rng;
/// let roll = with_engine(|rng| rng.random_range(1..=6)).unwrap();
/// assert!((1..=6).contains(&roll));
/// ```
pub fn with_engine<T, F>(f: F) -> Result<T, EntropyError>
where
    F: FnOnce(&mut Engine) -> T,
{
    with_engine_from(&mut OsEntropy, f)
}

/// [`with_engine`] with the seed drawn from `source` if this thread has no
/// engine yet. `source` is untouched once the engine exists.
pub(crate) fn with_engine_from<S, T, F>(source: &mut S, f: F) -> Result<T, EntropyError>
where
    S: EntropySource + ?Sized,
    F: FnOnce(&mut Engine) -> T,
{
    ENGINE.with(|slot| {
        let mut slot = slot
            .try_borrow_mut()
            .map_err(|_| EntropyError::EngineInUse)?;
        match &mut *slot {
            Some(engine) => Ok(f(engine)),
            None => {
                let engine = seed_thread_engine(source)?;
                Ok(f(slot.insert(engine)))
            }
        }
    })
}

/// Number of seeding sequences completed on the current thread.
///
/// `0` before the thread first touches its engine, `1` afterwards.
pub fn thread_seedings() -> usize {
    SEEDINGS.with(Cell::get)
}

/// Draws one value from this thread's engine.
///
/// # Examples
/// ```
/// let x: f64 = u_kit::random::random().unwrap();
/// assert!((0.0..1.0).contains(&x));
/// ```
pub fn random<T>() -> Result<T, EntropyError>
where
    StandardUniform: Distribution<T>,
{
    with_engine(|rng| rng.random())
}

/// Draws one value in `range` from this thread's engine.
///
/// # Panics
/// Panics if `range` is empty.
pub fn random_range<T, R>(range: R) -> Result<T, EntropyError>
where
    T: SampleUniform,
    R: SampleRange<T>,
{
    with_engine(|rng| rng.random_range(range))
}

// ============================================================================
// Explicit context
// ============================================================================

/// An owned, seeded generator handed to code that needs randomness.
///
/// Use one context per task or worker instead of reaching for hidden
/// thread state. Implements [`RngCore`], so every [`Rng`] method works on it.
///
/// # Examples
/// ```
/// use u_kit::random::RngContext;
/// use rand::Rng;
///
/// let mut a: RngContext = RngContext::seeded(42);
/// let mut b: RngContext = RngContext::seeded(42);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
#[derive(Debug, Clone)]
pub struct RngContext<R = Engine> {
    inner: R,
}

impl<R: SeedableRng> RngContext<R> {
    /// Seeds a new context from the operating system.
    ///
    /// # Errors
    /// Returns [`EntropyError::Unavailable`] if the OS source fails.
    pub fn from_entropy() -> Result<Self, EntropyError> {
        Self::from_source(&mut OsEntropy)
    }

    /// Seeds a new context from `source`.
    ///
    /// # Errors
    /// Propagates the source's error unchanged.
    pub fn from_source<S: EntropySource + ?Sized>(source: &mut S) -> Result<Self, EntropyError> {
        let inner = seed_generator(source)?;
        debug!(seed_bytes = seed_len::<R>(), "seeded rng context");
        Ok(Self { inner })
    }

    /// Creates a deterministic context from a fixed 64-bit seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: R::seed_from_u64(seed),
        }
    }
}

impl<R> RngContext<R> {
    /// Wraps an already-built generator.
    pub fn from_generator(inner: R) -> Self {
        Self { inner }
    }

    /// Borrows the wrapped generator.
    pub fn generator_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwraps the generator, keeping its current stream position.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RngCore> RngCore for RngContext<R> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// Records every request made to it and serves a counter pattern.
    struct CountingSource {
        calls: usize,
        bytes: usize,
    }

    impl EntropySource for CountingSource {
        fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
            self.calls += 1;
            self.bytes += dest.len();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = i as u8 ^ 0x5a;
            }
            Ok(())
        }
    }

    struct FailingSource;

    impl EntropySource for FailingSource {
        fn fill(&mut self, _dest: &mut [u8]) -> Result<(), EntropyError> {
            Err(EntropyError::Unavailable("no entropy".into()))
        }
    }

    #[test]
    fn test_seed_generator_asks_once_for_full_seed() {
        let mut source = CountingSource { calls: 0, bytes: 0 };
        let _rng: Engine = seed_generator(&mut source).unwrap();
        assert_eq!(source.calls, 1);
        assert_eq!(source.bytes, seed_len::<Engine>());
    }

    #[test]
    fn test_seed_generator_propagates_failure() {
        let result: Result<Engine, _> = seed_generator(&mut FailingSource);
        assert_eq!(
            result.unwrap_err(),
            EntropyError::Unavailable("no entropy".into())
        );
    }

    #[test]
    fn test_slice_source_exhausted() {
        let short = [1_u8; 3];
        let mut pool: &[u8] = &short;
        let err = RngContext::<Engine>::from_source(&mut pool).unwrap_err();
        assert_eq!(
            err,
            EntropyError::Exhausted {
                requested: seed_len::<Engine>(),
                available: 3,
            }
        );
        // nothing consumed on failure
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_slice_source_consumes_seed_len() {
        let bytes: Vec<u8> = (0..100).collect();
        let mut pool: &[u8] = &bytes;
        let _ctx = RngContext::<Engine>::from_source(&mut pool).unwrap();
        assert_eq!(pool.len(), 100 - seed_len::<Engine>());
        assert_eq!(pool[0], seed_len::<Engine>() as u8);
    }

    #[test]
    fn test_same_entropy_same_stream() {
        let bytes = [9_u8; 32];
        let mut a: RngContext = RngContext::from_source(&mut &bytes[..]).unwrap();
        let mut b: RngContext = RngContext::from_source(&mut &bytes[..]).unwrap();
        let va: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let vb: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_eq!(va, vb);
    }

    #[test]
    fn test_seeded_deterministic() {
        let mut rng1: RngContext = RngContext::seeded(42);
        let mut rng2: RngContext = RngContext::seeded(42);
        let vals1: Vec<f64> = (0..10).map(|_| rng1.random()).collect();
        let vals2: Vec<f64> = (0..10).map(|_| rng2.random()).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_from_entropy_contexts_differ() {
        let mut a: RngContext = RngContext::from_entropy().unwrap();
        let mut b: RngContext = RngContext::from_entropy().unwrap();
        let va: Vec<u64> = (0..4).map(|_| a.next_u64()).collect();
        let vb: Vec<u64> = (0..4).map(|_| b.next_u64()).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn test_into_inner_continues_stream() {
        let mut ctx: RngContext = RngContext::seeded(7);
        let mut twin: RngContext = RngContext::seeded(7);
        ctx.next_u64();
        twin.next_u64();
        let mut inner = ctx.into_inner();
        assert_eq!(inner.next_u64(), twin.generator_mut().next_u64());
    }

    #[test]
    fn test_engine_seeded_once_per_thread() {
        init_tracing();
        let handle = thread::spawn(|| {
            assert_eq!(thread_seedings(), 0);
            with_engine(|rng| rng.next_u64()).unwrap();
            assert_eq!(thread_seedings(), 1);
            for _ in 0..10 {
                with_engine(|rng| rng.next_u64()).unwrap();
            }
            let _: u32 = random().unwrap();
            assert_eq!(thread_seedings(), 1);
        });
        handle.join().unwrap();
    }

    #[test]
    fn test_threads_get_independent_engines() {
        let draw = || {
            thread::spawn(|| {
                let values: Vec<u64> = (0..8)
                    .map(|_| with_engine(|rng| rng.next_u64()).unwrap())
                    .collect();
                (values, thread_seedings())
            })
        };
        let (a, seeds_a) = draw().join().unwrap();
        let (b, seeds_b) = draw().join().unwrap();
        assert_eq!(seeds_a, 1);
        assert_eq!(seeds_b, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_failed_seeding_is_not_cached() {
        init_tracing();
        let handle = thread::spawn(|| {
            let err = with_engine_from(&mut FailingSource, |rng| rng.next_u64()).unwrap_err();
            assert_eq!(err, EntropyError::Unavailable("no entropy".into()));
            assert_eq!(thread_seedings(), 0);

            let mut source = CountingSource { calls: 0, bytes: 0 };
            with_engine_from(&mut source, |rng| rng.next_u64()).unwrap();
            assert_eq!(thread_seedings(), 1);
            assert_eq!(source.calls, 1);

            // engine exists now, so the source is never consulted again
            with_engine_from(&mut FailingSource, |rng| rng.next_u64()).unwrap();
            with_engine_from(&mut source, |rng| rng.next_u64()).unwrap();
            assert_eq!(source.calls, 1);
            assert_eq!(thread_seedings(), 1);
        });
        handle.join().unwrap();
    }

    #[test]
    fn test_short_seed_pool_leaves_thread_unseeded() {
        thread::spawn(|| {
            let short = [0_u8; 4];
            let mut pool: &[u8] = &short;
            let err = with_engine_from(&mut pool, |rng| rng.next_u32()).unwrap_err();
            assert!(matches!(err, EntropyError::Exhausted { available: 4, .. }));
            assert_eq!(thread_seedings(), 0);
            assert!(with_engine(|rng| rng.next_u32()).is_ok());
            assert_eq!(thread_seedings(), 1);
        })
        .join()
        .unwrap();
    }

    #[test]
    fn test_nested_engine_use_is_an_error() {
        let nested = with_engine(|_| random::<u32>()).unwrap();
        assert_eq!(nested, Err(EntropyError::EngineInUse));
        // outer borrow released afterwards
        assert!(random::<u32>().is_ok());
    }

    #[test]
    fn test_random_range_bounds() {
        for _ in 0..1000 {
            let x = random_range(10..20).unwrap();
            assert!((10..20).contains(&x));
        }
    }

    #[test]
    fn test_random_unit_interval() {
        for _ in 0..1000 {
            let x: f64 = random().unwrap();
            assert!((0.0..1.0).contains(&x));
        }
    }
}
