//! Injectable randomness for platform generation
//!
//! Gameplay is not seeded, but tests need reproducible platforms, so the
//! spawner draws from a `RandomSource` instead of a global generator.

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A source of uniform values in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

impl<F: FnMut() -> f32> RandomSource for F {
    fn next_unit(&mut self) -> f32 {
        self()
    }
}

/// Adapts any `rand::Rng` into a `RandomSource`
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f32 {
        self.0.random::<f32>()
    }
}

impl RngSource<ThreadRng> {
    /// Thread-local OS-seeded generator (normal gameplay)
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl RngSource<Pcg32> {
    /// Reproducible generator for tests and demos
    pub fn seeded(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }
}
