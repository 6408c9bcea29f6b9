// src/risk/drawdown.rs
//! Maximum drawdown
//!
//! The largest peak-to-trough decline of a close series, reported both in
//! price units and as a fraction of the running peak:
//! ```text
//! absolute   = max_t (runmax_t − C_t)
//! percentage = max_t ((runmax_t − C_t) / runmax_t)
//! ```
//! where `runmax_t` is the running maximum of closes up to `t`.
//!
//! The two maxima may occur at different dates: a drop from a small peak can
//! dominate in percentage terms while a drop from a large peak dominates in
//! price units.

use crate::error::{SimError, SimResult};
use crate::market::{Panel, Series};

/// Maximum drawdown of one ticker over a period
#[derive(Debug, Clone, PartialEq)]
pub struct Drawdown {
    pub ticker: String,
    /// Largest peak-to-trough decline in price units, ≥ 0
    pub absolute: f64,
    /// Largest peak-to-trough decline as a fraction of the peak, in [0, 1)
    pub percentage: f64,
}

/// Maximum drawdown of a close series
///
/// A series that never declines from its running peak has zero drawdown.
///
/// # Errors
///
/// Returns `SimError::InvalidParameter` if the series is empty or any close
/// is non-positive.
pub fn max_drawdown(closes: &Series) -> SimResult<Drawdown> {
    if closes.is_empty() {
        return Err(SimError::InvalidParameter {
            parameter: "closes".to_string(),
            value: 0.0,
            constraint: "must contain at least 1 observation".to_string(),
        });
    }
    if let Some(&bad) = closes.values.iter().find(|&&c| c <= 0.0 || !c.is_finite()) {
        return Err(SimError::InvalidParameter {
            parameter: "closes".to_string(),
            value: bad,
            constraint: "every close must be positive".to_string(),
        });
    }

    let mut running_max = f64::MIN;
    let mut absolute: f64 = 0.0;
    let mut percentage: f64 = 0.0;
    for &close in &closes.values {
        running_max = running_max.max(close);
        let drop = running_max - close;
        absolute = absolute.max(drop);
        percentage = percentage.max(drop / running_max);
    }

    Ok(Drawdown {
        ticker: closes.ticker.clone(),
        absolute,
        percentage,
    })
}

/// Maximum drawdown for every ticker in a panel
pub fn max_drawdown_panel(closes: &Panel) -> SimResult<Vec<Drawdown>> {
    closes.series.iter().map(max_drawdown).collect()
}
