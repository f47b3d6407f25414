use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of the pseudorandom draws consumed
/// during evolution.
///
/// Each [`Evolver`] owns its source, so independent
/// evolvers never share random state.
///
/// [`Evolver`]: crate::Evolver
pub trait RandomSource {
    /// Returns a uniformly distributed value in `[0, 1)`.
    fn uniform01(&mut self) -> f32;

    /// Returns a uniformly distributed weight in `[-1, 1)`.
    fn symmetric_weight(&mut self) -> f32;

    /// Returns a uniformly distributed integer in `[low, high)`.
    /// An empty range yields `low`.
    fn int_range(&mut self, low: usize, high: usize) -> usize;
}

/// Simple wrapper for a T: Rng,
/// adapting it to the [`RandomSource`] interface.
///
/// # Examples
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use weightevo::{RandomSource, RngSource};
///
/// let mut rng = RngSource::new(StdRng::seed_from_u64(7));
/// let w = rng.symmetric_weight();
/// assert!((-1.0..1.0).contains(&w));
/// ```
#[derive(Clone, Debug)]
pub struct RngSource<T: Rng>(T);

impl<T: Rng> RngSource<T> {
    pub fn new(rng: T) -> RngSource<T> {
        RngSource(rng)
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl RngSource<StdRng> {
    /// Returns a source seeded from operating system entropy.
    pub fn from_entropy() -> RngSource<StdRng> {
        RngSource(StdRng::from_entropy())
    }

    /// Returns a reproducible source seeded with `seed`.
    pub fn seeded(seed: u64) -> RngSource<StdRng> {
        RngSource(StdRng::seed_from_u64(seed))
    }
}

impl<T: Rng> RandomSource for RngSource<T> {
    fn uniform01(&mut self) -> f32 {
        self.0.gen::<f32>()
    }

    fn symmetric_weight(&mut self) -> f32 {
        self.0.gen_range(-1.0..1.0)
    }

    fn int_range(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            low
        } else {
            self.0.gen_range(low..high)
        }
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn uniform01(&mut self) -> f32 {
        (**self).uniform01()
    }

    fn symmetric_weight(&mut self) -> f32 {
        (**self).symmetric_weight()
    }

    fn int_range(&mut self, low: usize, high: usize) -> usize {
        (**self).int_range(low, high)
    }
}
