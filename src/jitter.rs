use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for the scattering brushes.
///
/// Spray and Star draw all of their randomness through this trait so that a
/// fixed implementation can stand in for the RNG when exact output matters.
pub trait Jitter {
    /// Uniform integer offset in `-reach..=reach`
    fn offset(&mut self, reach: i32) -> i32;

    /// Uniform sample in `[0, 1)`
    fn unit(&mut self) -> f32;

    /// Either `1.0` or `-1.0` with equal probability
    fn sign(&mut self) -> f32;
}

/// `Jitter` backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngJitter<R> {
    rng: R,
}

impl<R: Rng> RngJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngJitter<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible jitter for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RngJitter<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> Jitter for RngJitter<R> {
    fn offset(&mut self, reach: i32) -> i32 {
        let reach = reach.abs();
        self.rng.gen_range(-reach..=reach)
    }

    fn unit(&mut self) -> f32 {
        self.rng.r#gen::<f32>()
    }

    fn sign(&mut self) -> f32 {
        if self.rng.gen_bool(0.5) { 1.0 } else { -1.0 }
    }
}
