// src/models/binomial.rs
//! N-period binomial lattice path simulation
//!
//! Each period the price moves up by factor `u` with probability `p`, or down
//! by factor `d` with probability `1 - p`:
//! ```text
//! S_1(H) = u·S_0    S_1(T) = d·S_0
//! ```
//!
//! The simulator draws one Bernoulli(p) outcome per path per period, maps it
//! to the corresponding factor, and accumulates the running product across
//! the row — the same pipeline as the GBM simulator.

use crate::error::{validation::*, SimError, SimResult};
use crate::matrix::PathMatrix;
use crate::rng::{self, RngFactory};
use ndarray::Array2;
use rand_distr::Bernoulli;

/// Configuration for a binomial-model simulation
#[derive(Debug, Clone)]
pub struct BinomialConfig {
    /// Initial price, > 0
    pub s0: f64,
    /// Probability of an up-move, in [0, 1]
    pub p: f64,
    /// Up-move price multiplier, > 0
    pub u: f64,
    /// Down-move price multiplier, > 0
    pub d: f64,
    /// Number of independent paths
    pub paths: usize,
    /// Number of periods
    pub periods: usize,
    pub seed: u64,
}

impl BinomialConfig {
    /// Validate the configuration before any randomness is consumed
    pub fn validate(&self) -> SimResult<()> {
        validate_positive("s0", self.s0)?;
        validate_probability("p", self.p)?;
        validate_positive("u", self.u)?;
        validate_positive("d", self.d)?;
        validate_paths(self.paths)?;
        validate_steps("periods", self.periods)?;
        Ok(())
    }
}

impl Default for BinomialConfig {
    fn default() -> Self {
        BinomialConfig {
            s0: 100.0,
            p: 0.5,
            u: 1.1,
            d: 0.9,
            paths: 10_000,
            periods: 252,
            seed: 12345,
        }
    }
}

/// Simulate binomial price paths, seeding the random source from `cfg.seed`
///
/// # Returns
///
/// A [`PathMatrix`] of shape `(paths × periods+1)` with column 0 equal to
/// `s0` and every entry strictly positive.
///
/// # Errors
///
/// Returns `SimError::InvalidParameter` for out-of-domain inputs; no entropy
/// is consumed and no partial matrix is produced in that case.
pub fn simulate_binomial(cfg: &BinomialConfig) -> SimResult<PathMatrix> {
    simulate_binomial_with(cfg, &RngFactory::new(cfg.seed))
}

/// Simulate binomial price paths with an injected random source
pub fn simulate_binomial_with(cfg: &BinomialConfig, rngs: &RngFactory) -> SimResult<PathMatrix> {
    cfg.validate()?;

    let heads = Bernoulli::new(cfg.p).map_err(|_| SimError::InvalidParameter {
        parameter: "p".to_string(),
        value: cfg.p,
        constraint: "must be in range [0, 1]".to_string(),
    })?;

    let mut factors = Array2::<f64>::zeros((cfg.paths, cfg.periods));
    for (i, mut row) in factors.outer_iter_mut().enumerate() {
        let mut rng = rngs.create_std_rng(i as u64);
        for factor in row.iter_mut() {
            *factor = if rng::get_bernoulli_draw(&heads, &mut rng) {
                cfg.u
            } else {
                cfg.d
            };
        }
    }

    Ok(PathMatrix::from_step_factors(cfg.s0, &factors))
}
