// src/error.rs
use std::fmt;

/// Custom error type for the price-paths library
#[derive(Debug, Clone)]
pub enum SimError {
    /// Invalid parameter values
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidParameter {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Result type alias for price-paths operations
pub type SimResult<T> = Result<T, SimError>;

/// Validation utilities
pub mod validation {
    use super::{SimError, SimResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> SimResult<()> {
        if value <= 0.0 || !value.is_finite() {
            Err(SimError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> SimResult<()> {
        if value < 0.0 || !value.is_finite() {
            Err(SimError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SimResult<()> {
        if !value.is_finite() {
            Err(SimError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a probability parameter
    pub fn validate_probability(name: &str, p: f64) -> SimResult<()> {
        if !(0.0..=1.0).contains(&p) {
            Err(SimError::InvalidParameter {
                parameter: name.to_string(),
                value: p,
                constraint: "must be in range [0, 1]".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate paths count
    pub fn validate_paths(paths: usize) -> SimResult<()> {
        if paths == 0 {
            Err(SimError::InvalidParameter {
                parameter: "paths".to_string(),
                value: paths as f64,
                constraint: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate steps/periods count
    pub fn validate_steps(name: &str, steps: usize) -> SimResult<()> {
        if steps == 0 {
            Err(SimError::InvalidParameter {
                parameter: name.to_string(),
                value: steps as f64,
                constraint: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a rolling-window length against the available observations
    pub fn validate_window(window: usize, observations: usize) -> SimResult<()> {
        if window < 2 {
            Err(SimError::InvalidParameter {
                parameter: "window".to_string(),
                value: window as f64,
                constraint: "must be at least 2".to_string(),
            })
        } else if window > observations {
            Err(SimError::InvalidParameter {
                parameter: "window".to_string(),
                value: window as f64,
                constraint: format!(
                    "must not exceed the number of observations ({})",
                    observations
                ),
            })
        } else {
            Ok(())
        }
    }
}
