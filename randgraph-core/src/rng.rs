//! Randomness sources consumed by the generators.
//!
//! Generators draw every random decision through [`RandomSource`], so a
//! deterministically seeded source yields deterministic graphs. Any
//! [`rand::Rng`] is a source; the process-wide shared source backs the
//! convenience entry points and can be reseeded from the clock with
//! [`reseed`].

use std::{
    sync::{Mutex, MutexGuard, OnceLock, PoisonError},
    time::{SystemTime, UNIX_EPOCH},
};

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use tracing::debug;

/// Seed used by the shared source until [`reseed`] or [`reseed_with`] runs.
pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;

static SHARED: OnceLock<Mutex<SmallRng>> = OnceLock::new();

/// Supplies the uniform draws the generators depend on.
pub trait RandomSource {
    /// Returns a uniformly random permutation of `0..n`.
    fn permutation(&mut self, n: usize) -> Vec<usize>;

    /// Returns a uniformly random integer in `[0, n)`.
    ///
    /// # Panics
    /// Implementations may panic when `n` is zero; the generators never
    /// request an empty range.
    fn uniform_int(&mut self, n: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(self);
        order
    }

    fn uniform_int(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

/// Runs `f` with exclusive access to the process-wide source.
///
/// The lock is held for the whole closure, so a generation call sees an
/// uninterrupted sequence of draws even when other threads generate
/// concurrently.
///
/// # Examples
/// ```
/// use randgraph_core::{RandomSource, with_shared_source};
///
/// let mut order = with_shared_source(|rng| rng.permutation(4));
/// order.sort_unstable();
/// assert_eq!(order, [0, 1, 2, 3]);
/// ```
pub fn with_shared_source<T>(f: impl FnOnce(&mut SmallRng) -> T) -> T {
    let mut guard = lock_shared();
    f(&mut guard)
}

/// Reseeds the shared source from the high-resolution system clock and
/// returns the seed that was applied.
///
/// Call once per process before relying on variety across runs; skipping it
/// leaves the shared source on [`DEFAULT_SEED`].
pub fn reseed() -> u64 {
    let seed = clock_seed();
    reseed_with(seed);
    seed
}

/// Reseeds the shared source with an explicit `seed`.
pub fn reseed_with(seed: u64) {
    *lock_shared() = SmallRng::seed_from_u64(seed);
    debug!(seed, "reseeded shared random source");
}

fn lock_shared() -> MutexGuard<'static, SmallRng> {
    SHARED
        .get_or_init(|| Mutex::new(SmallRng::seed_from_u64(DEFAULT_SEED)))
        .lock()
        // A panic mid-draw cannot leave the RNG state invalid.
        .unwrap_or_else(PoisonError::into_inner)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(DEFAULT_SEED, |elapsed| {
            let nanos = elapsed.as_nanos();
            (nanos as u64) ^ ((nanos >> 64) as u64)
        })
}
