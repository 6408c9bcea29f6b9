// src/models/mod.rs
pub mod binomial;
pub mod gbm;

pub use binomial::{simulate_binomial, simulate_binomial_with, BinomialConfig};
pub use gbm::{simulate_gbm, simulate_gbm_with, GbmConfig};
