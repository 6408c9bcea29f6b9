// src/risk/returns.rs
//! Daily log returns
//!
//! ```text
//! r_t = ln(C_t / C_{t-1})
//! ```
//!
//! The returned series is one observation shorter than the closes and is
//! indexed by the date of each return's second close.

use crate::error::{SimError, SimResult};
use crate::market::{Panel, Series};

/// Daily log returns of a close series
///
/// # Errors
///
/// Returns `SimError::InvalidParameter` if fewer than two closes are supplied
/// or any close is non-positive.
pub fn log_returns(closes: &Series) -> SimResult<Series> {
    if closes.len() < 2 {
        return Err(SimError::InvalidParameter {
            parameter: "closes".to_string(),
            value: closes.len() as f64,
            constraint: "must contain at least 2 observations".to_string(),
        });
    }
    if let Some(&bad) = closes.values.iter().find(|&&c| c <= 0.0 || !c.is_finite()) {
        return Err(SimError::InvalidParameter {
            parameter: "closes".to_string(),
            value: bad,
            constraint: "every close must be positive".to_string(),
        });
    }

    let values: Vec<f64> = closes
        .values
        .windows(2)
        .map(|w| (w[1] / w[0]).ln())
        .collect();

    Series::new(
        closes.ticker.clone(),
        closes.dates[1..].to_vec(),
        values,
    )
}

/// Daily log returns for every ticker in a panel
pub fn log_returns_panel(closes: &Panel) -> SimResult<Panel> {
    let series = closes
        .series
        .iter()
        .map(log_returns)
        .collect::<SimResult<Vec<_>>>()?;
    Ok(Panel::new(series))
}
