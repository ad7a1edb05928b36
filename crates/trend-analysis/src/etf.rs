//! ETF trend metrics: distance to trend, realized volatility, performance
//! over the supplied window and drawdown from the high, plus the signal
//! derived from them.

use radar_core::{EtfSignal, PriceSeries};
use serde::{Deserialize, Serialize};

use crate::indicators::{annualized_volatility, drawdown_from_high, trailing_sma};
use crate::{TREND_WINDOW_LONG, VOLATILITY_WINDOW};

/// Trend-distance band around the SMA-200.
const TREND_DISTANCE_HOT: f64 = 0.05;
const TREND_DISTANCE_COLD: f64 = -0.05;
/// Volatility separating compounders from momentum runners.
const COMPOUNDER_VOLATILITY: f64 = 0.15;
/// Performance over the supplied window qualifying an uptrend.
const PERFORMANCE_STRONG: f64 = 0.10;
/// Drawdown separating a cooling phase from a dip/crash.
const DRAWDOWN_CRASH: f64 = -0.20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtfMetrics {
    /// (last - SMA-200) / SMA-200.
    pub trend_distance: f64,
    /// Annualized 30-day realized volatility.
    pub volatility: f64,
    /// (last - first) / first over the supplied series.
    pub performance: f64,
    /// (last - high) / high, <= 0.
    pub drawdown: f64,
    pub signal: EtfSignal,
}

pub struct EtfMetricsEngine;

impl EtfMetricsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Full metrics for a series, or `None` when fewer than 200
    /// observations exist. Never returns partial metrics.
    pub fn analyze(&self, series: &PriceSeries) -> Option<EtfMetrics> {
        let closes = series.closes();
        if closes.len() < TREND_WINDOW_LONG {
            return None;
        }

        let last = closes[closes.len() - 1];
        let sma200 = trailing_sma(&closes, TREND_WINDOW_LONG)?;
        let trend_distance = (last - sma200) / sma200;
        let volatility = annualized_volatility(&closes, VOLATILITY_WINDOW)?;
        let performance = (last - closes[0]) / closes[0];
        let drawdown = drawdown_from_high(&closes)?;

        let signal = classify(trend_distance, volatility, performance, drawdown);

        Some(EtfMetrics {
            trend_distance,
            volatility,
            performance,
            drawdown,
            signal,
        })
    }
}

impl Default for EtfMetricsEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// First match wins, top to bottom.
fn classify(trend_distance: f64, volatility: f64, performance: f64, drawdown: f64) -> EtfSignal {
    if trend_distance > TREND_DISTANCE_HOT && performance > PERFORMANCE_STRONG {
        if volatility < COMPOUNDER_VOLATILITY {
            EtfSignal::Compounder
        } else {
            EtfSignal::Momentum
        }
    } else if trend_distance < TREND_DISTANCE_COLD {
        if drawdown < DRAWDOWN_CRASH {
            EtfSignal::DipCrash
        } else {
            EtfSignal::Cooling
        }
    } else {
        EtfSignal::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use radar_core::PricePoint;

    fn series_from(closes: Vec<f64>) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let points = closes
            .into_iter()
            .enumerate()
            .map(|(i, close)| PricePoint {
                date: start + Duration::days(i as i64),
                close,
            })
            .collect();
        PriceSeries::new(points).unwrap()
    }

    #[test]
    fn short_series_yields_no_metrics_at_all() {
        let engine = EtfMetricsEngine::new();
        let series = series_from((0..199).map(|i| 100.0 + i as f64).collect());
        assert!(engine.analyze(&series).is_none());
    }

    #[test]
    fn quiet_uptrend_is_a_compounder() {
        let engine = EtfMetricsEngine::new();
        let series = series_from((0..250).map(|i| 100.0 + i as f64).collect());
        let metrics = engine.analyze(&series).unwrap();

        assert!(metrics.trend_distance > 0.05);
        assert!(metrics.performance > 0.10);
        assert!(metrics.volatility < 0.15);
        assert_eq!(metrics.drawdown, 0.0);
        assert_eq!(metrics.signal, EtfSignal::Compounder);
    }

    #[test]
    fn noisy_uptrend_is_momentum() {
        let engine = EtfMetricsEngine::new();
        // steady climb, then 30 sessions sawing upward in large steps
        let mut closes: Vec<f64> = (0..220).map(|i| 100.0 + 0.5 * i as f64).collect();
        let mut last = *closes.last().unwrap();
        for i in 0..30 {
            last += if i % 2 == 0 { 9.0 } else { -4.0 };
            closes.push(last);
        }
        let metrics = engine.analyze(&series_from(closes)).unwrap();

        assert!(metrics.volatility > 0.15);
        assert_eq!(metrics.signal, EtfSignal::Momentum);
    }

    #[test]
    fn shallow_slide_is_cooling() {
        let engine = EtfMetricsEngine::new();
        // ~15% grind lower: well below trend but drawdown above -20%
        let series = series_from((0..250).map(|i| 100.0 - 0.06 * i as f64).collect());
        let metrics = engine.analyze(&series).unwrap();

        assert!(metrics.trend_distance < -0.05);
        assert!(metrics.drawdown > -0.20);
        assert_eq!(metrics.signal, EtfSignal::Cooling);
    }

    #[test]
    fn deep_decline_is_a_dip_crash() {
        let engine = EtfMetricsEngine::new();
        let series = series_from((0..250).map(|i| 300.0 - i as f64).collect());
        let metrics = engine.analyze(&series).unwrap();

        assert!(metrics.drawdown < -0.20);
        assert_eq!(metrics.signal, EtfSignal::DipCrash);
    }

    #[test]
    fn sideways_series_is_neutral() {
        let engine = EtfMetricsEngine::new();
        // gentle ripple around 100 keeps trend distance inside the band
        let series = series_from(
            (0..250)
                .map(|i| 100.0 + if i % 2 == 0 { 0.5 } else { -0.5 })
                .collect(),
        );
        let metrics = engine.analyze(&series).unwrap();
        assert_eq!(metrics.signal, EtfSignal::Neutral);
    }
}
