// src/risk/volatility.rs
//! Rolling and whole-period annualized volatility
//!
//! Volatility is the sample (n−1) standard deviation of daily log returns,
//! scaled to a yearly-equivalent value by √252:
//! ```text
//! vol_annual = std(r) * √252
//! ```
//!
//! The rolling estimate applies the same formula over a trailing window of
//! `window` returns; only complete windows are emitted, so the rolling series
//! starts at the date of the `window`-th return.

use crate::error::{validation::validate_window, SimResult};
use crate::market::{Panel, Series};
use crate::math_utils::TRADING_DAYS_PER_YEAR;
use crate::risk::returns::log_returns;
use statrs::statistics::Statistics;

/// Default rolling-window history, in trading days
pub const DEFAULT_WINDOW: usize = 30;

/// Rolling and stationary annualized volatility for one ticker
#[derive(Debug, Clone)]
pub struct VolEstimate {
    /// Trailing-window annualized volatility, one value per complete window
    pub rolling: Series,
    /// Annualized volatility over the whole period
    pub annualized: f64,
}

/// Estimate volatility from a close series
///
/// # Errors
///
/// Returns `SimError::InvalidParameter` if the closes are too short or
/// non-positive, or if `window` is smaller than 2 or larger than the number
/// of daily returns the series yields.
pub fn volatility(closes: &Series, window: usize) -> SimResult<VolEstimate> {
    let returns = log_returns(closes)?;
    validate_window(window, returns.len())?;

    let annualize = TRADING_DAYS_PER_YEAR.sqrt();
    let rolling_values: Vec<f64> = returns
        .values
        .windows(window)
        .map(|w| w.iter().std_dev() * annualize)
        .collect();
    let rolling_dates = returns.dates[window - 1..].to_vec();

    let annualized = returns.values.iter().std_dev() * annualize;

    Ok(VolEstimate {
        rolling: Series::new(returns.ticker.clone(), rolling_dates, rolling_values)?,
        annualized,
    })
}

/// Volatility estimates for every ticker in a panel
pub fn volatility_panel(closes: &Panel, window: usize) -> SimResult<Vec<VolEstimate>> {
    closes
        .series
        .iter()
        .map(|s| volatility(s, window))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn close_series(values: Vec<f64>) -> Series {
        let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let dates = (0..values.len() as i64)
            .map(|i| start + chrono::Duration::days(i))
            .collect();
        Series::new("TEST", dates, values).unwrap()
    }

    #[test]
    fn test_constant_growth_has_zero_volatility() {
        // Every close is 1% above the previous one, so every log return is
        // identical and the sample standard deviation is exactly zero.
        let closes = close_series((0..20).map(|i| 100.0 * 1.01f64.powi(i)).collect());
        let estimate = volatility(&closes, 5).expect("valid series");

        assert!(estimate.annualized.abs() < 1e-9);
        assert!(estimate.rolling.values.iter().all(|v| v.abs() < 1e-9));
    }

    #[test]
    fn test_rolling_alignment() {
        let closes = close_series(vec![100.0, 101.0, 99.0, 102.0, 100.0, 103.0]);
        let estimate = volatility(&closes, 3).expect("valid series");

        // 5 returns, window 3 → 3 complete windows, first reported at the
        // date of the 3rd return.
        assert_eq!(estimate.rolling.len(), 3);
        assert_eq!(estimate.rolling.dates[0], closes.dates[3]);
    }

    #[test]
    fn test_annualized_matches_hand_computation() {
        let closes = close_series(vec![100.0, 102.0, 101.0, 104.0]);
        let estimate = volatility(&closes, 2).expect("valid series");

        let returns: Vec<f64> = closes
            .values
            .windows(2)
            .map(|w| (w[1] / w[0]).ln())
            .collect();
        let mean = returns.iter().sum::<f64>() / returns.len() as f64;
        let var = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>()
            / (returns.len() - 1) as f64;
        let expected = var.sqrt() * 252.0f64.sqrt();

        assert!((estimate.annualized - expected).abs() < 1e-12);
    }

    #[test]
    fn test_window_bounds_rejected() {
        let closes = close_series(vec![100.0, 101.0, 102.0, 103.0]);
        // 3 returns available
        assert!(volatility(&closes, 1).is_err());
        assert!(volatility(&closes, 4).is_err());
        assert!(volatility(&closes, 3).is_ok());
    }
}
