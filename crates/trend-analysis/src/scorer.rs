use radar_core::{AssetClass, FundamentalsSnapshot, PriceSeries, ScoreResult};

use crate::indicators::{annualized_volatility, trailing_sma};
use crate::{TREND_WINDOW_LONG, TREND_WINDOW_MEDIUM, VOLATILITY_WINDOW};

/// Beta below this counts as calmer than the market.
const CALM_BETA: f64 = 1.2;
/// Annualized volatility below this counts as calm for ETFs.
const CALM_VOLATILITY: f64 = 0.20;

/// Trend and market-psychology scoring over a daily price series.
pub struct TrendScoreEngine;

impl TrendScoreEngine {
    pub fn new() -> Self {
        Self
    }

    /// Trend/psychology score in [0,10].
    ///
    /// Series shorter than 200 observations return the fixed neutral 5:
    /// without an SMA-200 there is no trend to judge, and that is a
    /// documented sentinel rather than an error.
    pub fn score(
        &self,
        series: &PriceSeries,
        snapshot: Option<&FundamentalsSnapshot>,
        asset_class: AssetClass,
    ) -> ScoreResult {
        let closes = series.closes();
        if closes.len() < TREND_WINDOW_LONG {
            return ScoreResult::neutral(format!(
                "Fewer than {TREND_WINDOW_LONG} observations, scoring neutral"
            ));
        }

        let last = closes[closes.len() - 1];
        let mut raw = 0i32;
        let mut reasons = Vec::new();

        // 1. Long-term trend
        if let Some(sma200) = trailing_sma(&closes, TREND_WINDOW_LONG) {
            if last > sma200 {
                raw += 4;
                reasons.push("Price above SMA-200, long-term uptrend intact (+4)".to_string());
            }
        }

        // 2. Medium-term momentum
        if let Some(sma50) = trailing_sma(&closes, TREND_WINDOW_MEDIUM) {
            if last > sma50 {
                raw += 3;
                reasons.push("Price above SMA-50, momentum positive (+3)".to_string());
            }
        }

        // 3. Stability / fear factor
        match asset_class {
            AssetClass::Stock => {
                // Absent beta defaults to the market's 1.0
                let beta = snapshot.and_then(|s| s.beta).unwrap_or(1.0);
                if beta < CALM_BETA {
                    raw += 3;
                    reasons.push(format!("Beta {beta:.2} below {CALM_BETA}, calmer than the market (+3)"));
                }
            }
            AssetClass::Etf => {
                if let Some(vol) = annualized_volatility(&closes, VOLATILITY_WINDOW) {
                    if vol < CALM_VOLATILITY {
                        raw += 3;
                        reasons.push(format!(
                            "Realized volatility {:.1}% below {:.0}% (+3)",
                            vol * 100.0,
                            CALM_VOLATILITY * 100.0
                        ));
                    }
                }
            }
        }

        ScoreResult::clamped(raw, reasons)
    }

    /// Stability score standing in for the quality score when no
    /// fundamentals exist: round(10 - volatility * 20), clamped. Higher
    /// score means lower risk.
    pub fn stability_score(&self, series: &PriceSeries) -> ScoreResult {
        match annualized_volatility(&series.closes(), VOLATILITY_WINDOW) {
            Some(vol) => {
                let raw = (10.0 - vol * 20.0).round() as i32;
                ScoreResult::clamped(
                    raw,
                    vec![format!("Annualized 30-day volatility {:.1}%", vol * 100.0)],
                )
            }
            None => ScoreResult::neutral("Too few observations to estimate volatility"),
        }
    }
}

impl Default for TrendScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}
