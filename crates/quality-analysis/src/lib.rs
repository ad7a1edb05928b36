//! Fundamental quality ("moat") scoring.
//!
//! Maps a fundamentals snapshot to an additive 0-10 score. Each criterion
//! is evaluated independently; tiers inside a criterion are exclusive and
//! the first matching tier wins. A missing ratio never triggers a tier,
//! so unknown data earns no credit and no penalty (debt/equity defaults to
//! 100, which fails its only tier and behaves the same way).

mod valuation;

pub use valuation::{ValuationClassifier, ValuationThresholds};

use radar_core::{FundamentalsSnapshot, ScoreResult};

/// Gross margin tiers (pricing power).
const GROSS_MARGIN_WIDE: f64 = 0.50;
const GROSS_MARGIN_SOLID: f64 = 0.30;
const GROSS_MARGIN_WEAK: f64 = 0.10;
/// Return-on-equity tiers (barriers to entry).
const ROE_STRONG: f64 = 0.20;
const ROE_DECENT: f64 = 0.12;
/// Operating margin tier (operative efficiency).
const OPERATING_MARGIN_STRONG: f64 = 0.15;
/// Debt/equity tier, "times 100" convention.
const DEBT_TO_EQUITY_LOW: f64 = 80.0;
const DEBT_TO_EQUITY_DEFAULT: f64 = 100.0;

pub struct QualityScoreEngine;

impl QualityScoreEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, snapshot: &FundamentalsSnapshot) -> ScoreResult {
        let mut raw = 0i32;
        let mut reasons = Vec::new();

        // 1. Pricing power (gross margin)
        if let Some(gm) = snapshot.gross_margins {
            if gm > GROSS_MARGIN_WIDE {
                raw += 3;
                reasons.push(format!("Gross margin {:.0}% signals strong pricing power (+3)", gm * 100.0));
            } else if gm > GROSS_MARGIN_SOLID {
                raw += 2;
                reasons.push(format!("Gross margin {:.0}% signals solid pricing power (+2)", gm * 100.0));
            } else if gm < GROSS_MARGIN_WEAK {
                raw -= 1;
                reasons.push(format!("Gross margin {:.0}% signals commodity pricing (-1)", gm * 100.0));
            }
        }

        // 2. Barriers to entry (return on equity)
        if let Some(roe) = snapshot.return_on_equity {
            if roe > ROE_STRONG {
                raw += 3;
                reasons.push(format!("ROE {:.0}% points at durable barriers (+3)", roe * 100.0));
            } else if roe > ROE_DECENT {
                raw += 1;
                reasons.push(format!("ROE {:.0}% is above average (+1)", roe * 100.0));
            }
        }

        // 3. Operative efficiency (operating margin)
        if let Some(om) = snapshot.operating_margins {
            if om > OPERATING_MARGIN_STRONG {
                raw += 2;
                reasons.push(format!("Operating margin {:.0}% shows efficiency (+2)", om * 100.0));
            }
        }

        // 4. Balance-sheet strength (debt/equity, missing treated as 100)
        let de = snapshot.debt_to_equity.unwrap_or(DEBT_TO_EQUITY_DEFAULT);
        if de < DEBT_TO_EQUITY_LOW {
            raw += 2;
            reasons.push(format!("Debt/equity {de:.0} leaves a sturdy balance sheet (+2)"));
        }

        ScoreResult::clamped(raw, reasons)
    }
}

impl Default for QualityScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_marks_for_a_wide_moat() {
        let snapshot = FundamentalsSnapshot {
            gross_margins: Some(0.55),
            return_on_equity: Some(0.25),
            operating_margins: Some(0.20),
            debt_to_equity: Some(50.0),
            ..Default::default()
        };

        let result = QualityScoreEngine::new().score(&snapshot);
        assert_eq!(result.score, 10);
        assert_eq!(result.reasons.len(), 4);
    }

    #[test]
    fn weak_margin_penalty_clamps_at_zero() {
        // -1 for the thin gross margin, no other criterion fires, raw sum -1
        let snapshot = FundamentalsSnapshot {
            gross_margins: Some(0.05),
            ..Default::default()
        };

        let result = QualityScoreEngine::new().score(&snapshot);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn empty_snapshot_earns_nothing() {
        let result = QualityScoreEngine::new().score(&FundamentalsSnapshot::default());
        assert_eq!(result.score, 0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn tiers_within_a_criterion_are_exclusive() {
        // 0.55 matches both >0.50 and >0.30; only the top tier applies
        let snapshot = FundamentalsSnapshot {
            gross_margins: Some(0.55),
            ..Default::default()
        };
        assert_eq!(QualityScoreEngine::new().score(&snapshot).score, 3);

        let snapshot = FundamentalsSnapshot {
            gross_margins: Some(0.35),
            ..Default::default()
        };
        assert_eq!(QualityScoreEngine::new().score(&snapshot).score, 2);
    }

    #[test]
    fn middling_ratios_score_partial_credit() {
        let snapshot = FundamentalsSnapshot {
            gross_margins: Some(0.40),
            return_on_equity: Some(0.15),
            operating_margins: Some(0.10),
            debt_to_equity: Some(120.0),
            ..Default::default()
        };
        // +2 margin, +1 ROE, op margin and leverage miss their tiers
        assert_eq!(QualityScoreEngine::new().score(&snapshot).score, 3);
    }

    #[test]
    fn scoring_is_deterministic() {
        let snapshot = FundamentalsSnapshot {
            gross_margins: Some(0.42),
            return_on_equity: Some(0.22),
            debt_to_equity: Some(60.0),
            ..Default::default()
        };
        let engine = QualityScoreEngine::new();
        assert_eq!(engine.score(&snapshot), engine.score(&snapshot));
    }
}
