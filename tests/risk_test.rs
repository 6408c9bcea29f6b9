// tests/risk_test.rs
use chrono::NaiveDate;
use price_paths::market::{CloseProvider, Panel, Period, Series};
use price_paths::models::gbm::{simulate_gbm, GbmConfig};
use price_paths::risk::{log_returns_panel, max_drawdown_panel, volatility_panel};
use price_paths::SimResult;

/// In-memory stand-in for the external market-data provider
struct FixtureProvider {
    panel: Panel,
}

impl CloseProvider for FixtureProvider {
    fn closes(&self, tickers: &[&str], _period: Period) -> SimResult<Panel> {
        let series = tickers
            .iter()
            .filter_map(|&t| self.panel.get(t).cloned())
            .collect();
        Ok(Panel::new(series))
    }
}

fn trading_dates(n: usize) -> Vec<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    (0..n as i64).map(|i| start + chrono::Duration::days(i)).collect()
}

fn fixture_provider() -> FixtureProvider {
    let steady: Vec<f64> = (0..60).map(|i| 100.0 * 1.002f64.powi(i)).collect();
    let choppy: Vec<f64> = (0..60)
        .map(|i| 50.0 * (1.0 + 0.1 * ((i as f64) * 0.7).sin()))
        .collect();

    let panel = Panel::new(vec![
        Series::new("STEADY", trading_dates(60), steady).unwrap(),
        Series::new("CHOPPY", trading_dates(60), choppy).unwrap(),
    ]);
    FixtureProvider { panel }
}

#[test]
fn test_risk_measures_through_provider_seam() {
    let provider = fixture_provider();
    let closes = provider
        .closes(&["STEADY", "CHOPPY"], Period::ThreeMonths)
        .expect("fixture closes");

    let returns = log_returns_panel(&closes).expect("valid closes");
    assert_eq!(returns.tickers(), vec!["STEADY", "CHOPPY"]);
    for series in &returns.series {
        assert_eq!(series.len(), 59);
    }

    let vols = volatility_panel(&closes, 20).expect("valid closes");
    assert_eq!(vols.len(), 2);

    // A constant-growth series has identical log returns, hence zero vol;
    // the oscillating series does not.
    assert!(vols[0].annualized.abs() < 1e-9);
    assert!(vols[1].annualized > 0.0);

    let drawdowns = max_drawdown_panel(&closes).expect("valid closes");
    assert_eq!(drawdowns[0].ticker, "STEADY");
    assert_eq!(drawdowns[0].absolute, 0.0);
    assert!(drawdowns[1].percentage > 0.0);
}

#[test]
fn test_provider_respects_requested_tickers() {
    let provider = fixture_provider();
    let closes = provider.closes(&["CHOPPY"], Period::OneMonth).expect("fixture closes");

    assert_eq!(closes.tickers(), vec!["CHOPPY"]);
}

#[test]
fn test_risk_measures_on_simulated_path() {
    // A simulated GBM trajectory is itself a close series once dated; the
    // realized volatility of a long path should land near the model sigma.
    let cfg = GbmConfig {
        s0: 100.0,
        mu: 0.05,
        sigma: 0.2,
        paths: 1,
        steps: 5_000,
        seed: 21,
    };
    let walks = simulate_gbm(&cfg).expect("Valid configuration");

    let closes = Series::new(
        "SIM",
        trading_dates(walks.num_steps() + 1),
        walks.path(0).to_vec(),
    )
    .expect("matching lengths");

    let vol = price_paths::risk::volatility(&closes, 30).expect("valid series");

    println!("\nRealized vol: {} (model sigma {})", vol.annualized, cfg.sigma);
    assert!(
        (vol.annualized - cfg.sigma).abs() < 0.02,
        "Realized vol {} too far from model sigma {}",
        vol.annualized,
        cfg.sigma
    );

    let dd = price_paths::risk::max_drawdown(&closes).expect("valid series");
    assert!(dd.absolute >= 0.0);
    assert!(dd.percentage < 1.0);
}

#[test]
fn test_window_larger_than_period_rejected() {
    let closes = Series::new(
        "SHORT",
        trading_dates(10),
        (0..10).map(|i| 100.0 + i as f64).collect(),
    )
    .unwrap();

    // 9 returns available, window of 30 must be refused
    let result = price_paths::risk::volatility(&closes, 30);
    assert!(result.is_err());
}
