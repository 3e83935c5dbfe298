//! Chance-event sampling with deterministic seeding support.

use rand::distributions::Uniform;
use rand::prelude::*;
use rand::rngs::SmallRng;

/// Uniform random event source for the behavior's chance draws.
///
/// If seed is 0, uses random entropy for non-deterministic behavior.
/// Otherwise, uses the provided seed for reproducible runs.
#[derive(Clone, Debug)]
pub struct EventSampler {
    rng: SmallRng,
}

impl EventSampler {
    /// Create a new sampler.
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self { rng }
    }

    /// Draw a uniform value in [0, 1).
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        Uniform::new(0.0f64, 1.0).sample(&mut self.rng)
    }

    /// Returns true with the given probability.
    ///
    /// `chance(0.0)` is always false and `chance(1.0)` always true, so tests
    /// can force or suppress an event outright.
    #[inline]
    pub fn chance(&mut self, probability: f64) -> bool {
        self.uniform() < probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_seed() {
        let mut a = EventSampler::new(42);
        let mut b = EventSampler::new(42);
        for _ in 0..100 {
            assert_eq!(a.uniform(), b.uniform());
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut sampler = EventSampler::new(7);
        for _ in 0..100 {
            assert!(!sampler.chance(0.0));
            assert!(sampler.chance(1.0));
        }
    }
}
