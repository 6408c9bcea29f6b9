//! # price-paths: Price-Path Simulation and Market Risk Measures
//!
//! A Rust library of standalone financial-analytics functions: stochastic
//! price-path simulators and market risk-measure calculators.
//!
//! ## Key Features
//!
//! - **GBM Simulator**: price paths under lognormal stochastic dynamics
//! - **Binomial Simulator**: price paths under a discrete up/down lattice model
//! - **Risk Measures**: daily log returns, rolling/annualized volatility,
//!   maximum drawdown over date-indexed close series
//! - **Deterministic Seeding**: an injectable random-source factory makes every
//!   simulation reproducible from a single seed
//! - **Robust Validation**: out-of-domain parameters are rejected before any
//!   randomness is consumed
//!
//! ## Quick Start
//!
//! ```rust
//! use price_paths::models::gbm::{simulate_gbm, GbmConfig};
//!
//! // Configure one year of daily GBM paths
//! let cfg = GbmConfig {
//!     s0: 100.0,     // Initial price
//!     mu: 0.05,      // Annualized drift
//!     sigma: 0.2,    // Annualized volatility
//!     paths: 1_000,
//!     steps: 252,
//!     seed: 42,
//! };
//!
//! let walks = simulate_gbm(&cfg).expect("Valid configuration");
//! assert_eq!(walks.num_paths(), 1_000);
//! assert_eq!(walks.price(0, 0), 100.0);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Both simulators share one pipeline: generate a grid of per-step
//! multiplicative factors (lognormal for GBM, Bernoulli-selected `u`/`d` for
//! the binomial model), prepend the initial price, and take the running
//! product along the time axis. Annualization uses the fixed 252-trading-day
//! convention throughout.

// Module declarations
pub mod error;
pub mod market;
pub mod math_utils;
pub mod matrix;
pub mod models;
pub mod output;
pub mod risk;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{SimError, SimResult};
pub use market::{CloseProvider, Panel, Period, Series};
pub use matrix::PathMatrix;
pub use models::{simulate_binomial, simulate_gbm, BinomialConfig, GbmConfig};
