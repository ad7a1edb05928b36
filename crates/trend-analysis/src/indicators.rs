use statrs::statistics::Statistics;

/// Trading days per year, used to annualize daily volatility.
const TRADING_DAYS: f64 = 252.0;

/// Simple moving average over the trailing `period` observations,
/// ending at the last one. `None` when the series is too short.
pub fn trailing_sma(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period {
        return None;
    }
    let tail = &closes[closes.len() - period..];
    Some(tail.iter().sum::<f64>() / period as f64)
}

/// Daily percentage returns between consecutive observations.
pub fn daily_returns(closes: &[f64]) -> Vec<f64> {
    closes.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect()
}

/// Annualized standard deviation of the trailing `window` daily returns.
/// `None` when fewer than two returns exist (sample std-dev undefined).
pub fn annualized_volatility(closes: &[f64], window: usize) -> Option<f64> {
    let returns = daily_returns(closes);
    let start = returns.len().saturating_sub(window);
    let tail = &returns[start..];
    if tail.len() < 2 {
        return None;
    }
    Some(tail.std_dev() * TRADING_DAYS.sqrt())
}

/// Distance of the last close from the running series maximum, as a
/// fraction <= 0 (0 when the last close is the high).
pub fn drawdown_from_high(closes: &[f64]) -> Option<f64> {
    let last = *closes.last()?;
    let high = closes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((last - high) / high)
}
