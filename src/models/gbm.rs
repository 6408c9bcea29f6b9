// src/models/gbm.rs
//! Geometric Brownian Motion path simulation
//!
//! # Mathematical Framework
//!
//! Under GBM the asset follows:
//! ```text
//! dS_t = μ S_t dt + σ S_t dW_t
//! ```
//!
//! With exact solution over one step:
//! ```text
//! S_{t+dt} = S_t * exp((μ - σ²/2)dt + σ√dt * Z)
//! ```
//! where Z ~ N(0,1). The simulator draws one Z per path per step, converts it
//! into a multiplicative factor, and accumulates the running product across
//! the row.
//!
//! Time is measured in trading days: dt = 1/252, with `mu` and `sigma`
//! quoted as annualized drift and volatility.
//!
//! # Note
//!
//! Standard-normal increments are an approximation. Real asset returns exhibit
//! greater kurtosis (fat tails) and skew than the lognormal model captures;
//! this is a known, accepted limitation of the model.

use crate::error::{validation::*, SimResult};
use crate::math_utils::TRADING_DAYS_PER_YEAR;
use crate::matrix::PathMatrix;
use crate::rng::{self, RngFactory};
use ndarray::Array2;

/// Configuration for a GBM simulation
#[derive(Debug, Clone)]
pub struct GbmConfig {
    /// Initial price, > 0
    pub s0: f64,
    /// Annualized drift
    pub mu: f64,
    /// Annualized volatility, ≥ 0
    pub sigma: f64,
    /// Number of independent paths
    pub paths: usize,
    /// Number of daily time steps
    pub steps: usize,
    pub seed: u64,
}

impl GbmConfig {
    /// Validate the configuration before any randomness is consumed
    pub fn validate(&self) -> SimResult<()> {
        validate_positive("s0", self.s0)?;
        validate_finite("mu", self.mu)?;
        validate_non_negative("sigma", self.sigma)?;
        validate_paths(self.paths)?;
        validate_steps("steps", self.steps)?;
        Ok(())
    }
}

impl Default for GbmConfig {
    fn default() -> Self {
        GbmConfig {
            s0: 100.0,
            mu: 0.05,
            sigma: 0.2,
            paths: 10_000,
            steps: 252,
            seed: 12345,
        }
    }
}

/// Simulate GBM price paths, seeding the random source from `cfg.seed`
///
/// # Returns
///
/// A [`PathMatrix`] of shape `(paths × steps+1)` with column 0 equal to `s0`
/// and every entry strictly positive.
///
/// # Errors
///
/// Returns `SimError::InvalidParameter` for out-of-domain inputs; no entropy
/// is consumed and no partial matrix is produced in that case.
pub fn simulate_gbm(cfg: &GbmConfig) -> SimResult<PathMatrix> {
    simulate_gbm_with(cfg, &RngFactory::new(cfg.seed))
}

/// Simulate GBM price paths with an injected random source
pub fn simulate_gbm_with(cfg: &GbmConfig, rngs: &RngFactory) -> SimResult<PathMatrix> {
    cfg.validate()?;

    let dt = 1.0 / TRADING_DAYS_PER_YEAR;
    let drift = (cfg.mu - 0.5 * cfg.sigma * cfg.sigma) * dt;
    let diffusion = cfg.sigma * dt.sqrt();

    let mut factors = Array2::<f64>::zeros((cfg.paths, cfg.steps));
    for (i, mut row) in factors.outer_iter_mut().enumerate() {
        let mut rng = rngs.create_std_rng(i as u64);
        for factor in row.iter_mut() {
            let z = rng::get_normal_draw(&mut rng);
            *factor = (drift + diffusion * z).exp();
        }
    }

    Ok(PathMatrix::from_step_factors(cfg.s0, &factors))
}
