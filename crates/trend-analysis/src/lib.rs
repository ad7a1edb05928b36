//! Price-series analytics: trend/psychology scoring, the volatility-based
//! stability score, and the ETF trend-metrics pipeline.

pub mod etf;
pub mod indicators;
mod scorer;

pub use etf::{EtfMetrics, EtfMetricsEngine};
pub use scorer::TrendScoreEngine;

/// Observations needed for the long moving average; series shorter than
/// this score neutral.
pub(crate) const TREND_WINDOW_LONG: usize = 200;
pub(crate) const TREND_WINDOW_MEDIUM: usize = 50;
/// Trailing daily returns entering the realized-volatility estimate.
pub(crate) const VOLATILITY_WINDOW: usize = 30;
