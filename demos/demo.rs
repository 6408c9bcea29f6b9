// demos/demo.rs
use chrono::NaiveDate;
use price_paths::market::Series;
use price_paths::math_utils::Timer;
use price_paths::models::binomial::{simulate_binomial, BinomialConfig};
use price_paths::models::gbm::{simulate_gbm, GbmConfig};
use price_paths::output;
use price_paths::risk::{log_returns, max_drawdown, volatility, DEFAULT_WINDOW};

fn main() {
    println!("Running price-paths Demo\n");

    let gbm_cfg = GbmConfig {
        s0: 100.0,
        mu: 0.05,
        sigma: 0.2,
        paths: 10_000,
        steps: 252,
        seed: 12345,
    };

    let binomial_cfg = BinomialConfig {
        s0: 100.0,
        p: 0.55,
        u: 1.02,
        d: 0.985,
        paths: 10_000,
        periods: 252,
        seed: 12345,
    };

    // --- GBM Simulation ---
    println!("--- GBM Simulation ---");
    let mut timer = Timer::new();
    timer.start();
    let gbm_walks = simulate_gbm(&gbm_cfg).expect("Valid configuration");
    let gbm_time = timer.elapsed_ms();

    let terminal = gbm_walks.terminal_prices();
    let mean_terminal = terminal.iter().sum::<f64>() / terminal.len() as f64;
    let min_terminal = terminal.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_terminal = terminal.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    println!(
        "Simulated {} paths x {} steps ({} ms)",
        gbm_walks.num_paths(),
        gbm_walks.num_steps(),
        gbm_time
    );
    println!("Mean terminal price: {:.4}", mean_terminal);
    println!(
        "Analytic E[S_T]: {:.4}",
        gbm_cfg.s0 * (gbm_cfg.mu * gbm_cfg.steps as f64 / 252.0).exp()
    );
    println!("Terminal range: [{:.4}, {:.4}]\n", min_terminal, max_terminal);

    // --- Binomial Simulation ---
    println!("--- Binomial Simulation ---");
    timer.start();
    let binomial_walks = simulate_binomial(&binomial_cfg).expect("Valid configuration");
    let binomial_time = timer.elapsed_ms();

    let terminal = binomial_walks.terminal_prices();
    let mean_terminal = terminal.iter().sum::<f64>() / terminal.len() as f64;
    let step_mean = binomial_cfg.p * binomial_cfg.u + (1.0 - binomial_cfg.p) * binomial_cfg.d;
    println!(
        "Simulated {} paths x {} periods ({} ms)",
        binomial_walks.num_paths(),
        binomial_walks.num_steps(),
        binomial_time
    );
    println!("Mean terminal price: {:.4}", mean_terminal);
    println!(
        "Analytic E[S_N]: {:.4}\n",
        binomial_cfg.s0 * step_mean.powi(binomial_cfg.periods as i32)
    );

    // --- Risk Measures on a Simulated Path ---
    println!("--- Risk Measures (first GBM path) ---");
    let start = NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid date");
    let dates: Vec<NaiveDate> = (0..=gbm_walks.num_steps() as i64)
        .map(|i| start + chrono::Duration::days(i))
        .collect();
    let closes = Series::new("SIM", dates, gbm_walks.path(0).to_vec())
        .expect("matching lengths");

    let returns = log_returns(&closes).expect("valid series");
    let mean_return = returns.values.iter().sum::<f64>() / returns.len() as f64;
    println!("Daily log returns: {} observations, mean {:.6}", returns.len(), mean_return);

    let vol = volatility(&closes, DEFAULT_WINDOW).expect("valid series");
    println!(
        "Annualized vol: {:.4} (model sigma {})",
        vol.annualized, gbm_cfg.sigma
    );
    println!(
        "Rolling vol ({}-day): {} windows, last {:.4}",
        DEFAULT_WINDOW,
        vol.rolling.len(),
        vol.rolling.values.last().copied().unwrap_or(f64::NAN)
    );

    let dd = max_drawdown(&closes).expect("valid series");
    println!(
        "Max drawdown: {:.4} absolute, {:.2}% of peak\n",
        dd.absolute,
        dd.percentage * 100.0
    );

    // --- CSV Output ---
    std::fs::create_dir_all("results").expect("Could not create results directory");

    match output::write_matrix_to_csv("results/gbm_paths.csv", &gbm_walks) {
        Ok(_) => println!("GBM path data written to results/gbm_paths.csv"),
        Err(e) => eprintln!("Error writing path data: {}", e),
    }
    match output::write_series_to_csv("results/rolling_vol.csv", &vol.rolling) {
        Ok(_) => println!("Rolling volatility written to results/rolling_vol.csv"),
        Err(e) => eprintln!("Error writing rolling volatility: {}", e),
    }
}
