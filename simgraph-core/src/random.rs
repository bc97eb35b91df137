//! Injectable randomness for the generators.
//!
//! Every generator takes a caller-owned `&mut R where R: RandomSource`, so
//! runs are reproducible whenever the source is seeded. Any [`rand::Rng`]
//! already satisfies the trait.

use rand::{Rng, SeedableRng, distributions::Standard, rngs::SmallRng, seq::SliceRandom};

/// Source of the random draws consumed by the generators.
pub trait RandomSource {
    /// Draws an integer uniformly from the inclusive range `[low, high]`.
    ///
    /// Callers guarantee `low <= high`.
    fn uniform_int(&mut self, low: usize, high: usize) -> usize;

    /// Picks one element of `items` uniformly, or `None` when it is empty.
    fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>;

    /// Draws a float uniformly from `[0, 1)`.
    fn unit_interval(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..=high)
    }

    fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(self)
    }

    fn unit_interval(&mut self) -> f64 {
        self.sample(Standard)
    }
}

/// Builds a deterministic generator from `seed`.
///
/// # Examples
/// ```
/// use simgraph_core::{RandomSource, seeded_rng};
///
/// let mut a = seeded_rng(7);
/// let mut b = seeded_rng(7);
/// assert_eq!(a.uniform_int(0, 100), b.uniform_int(0, 100));
/// ```
#[must_use]
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Builds a generator seeded from operating-system entropy.
#[must_use]
pub fn entropy_rng() -> SmallRng {
    SmallRng::from_entropy()
}
