// src/rng.rs
//! Random Number Generation for Path Simulation
//!
//! # Design Philosophy
//!
//! Path simulators require random numbers with specific properties:
//! 1. **Reproducibility**: Same seed → same paths (critical for debugging/validation)
//! 2. **Independence**: Each path must have its own stream, so that concurrent
//!    invocations never share mutable generator state
//! 3. **Statistical quality**: Good distributional properties
//!
//! The factory hands out one seeded [`StdRng`] per path id. The mapping
//! `(base_seed, path_id) → stream` is deterministic, so a simulation is fully
//! reproducible from its base seed regardless of how paths are scheduled.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Bernoulli, Distribution, StandardNormal};

/// RNG factory for reproducible simulations
///
/// This is the injected random-source capability: simulators take a factory
/// rather than constructing a generator internally, so tests can seed
/// deterministically.
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Create an independent RNG for a specific path
    pub fn create_std_rng(&self, path_id: u64) -> StdRng {
        StdRng::seed_from_u64(self.base_seed.wrapping_add(path_id))
    }
}

pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw a standard-normal variate Z ~ N(0,1)
pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

/// Draw a Bernoulli(p) outcome: true = up-move, false = down-move
pub fn get_bernoulli_draw<R: Rng + ?Sized>(dist: &Bernoulli, rng: &mut R) -> bool {
    dist.sample(rng)
}
