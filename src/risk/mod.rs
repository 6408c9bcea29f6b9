// src/risk/mod.rs
pub mod drawdown;
pub mod returns;
pub mod volatility;

pub use drawdown::{max_drawdown, max_drawdown_panel, Drawdown};
pub use returns::{log_returns, log_returns_panel};
pub use volatility::{volatility, volatility_panel, VolEstimate, DEFAULT_WINDOW};
