//! Valuation classification from P/E, PEG and P/B multiples.
//!
//! The dashboard variants ship slightly different boundary constants, so
//! the cut-offs live in a named threshold profile instead of literals.

use radar_core::{FundamentalsSnapshot, ValuationSignal};
use serde::{Deserialize, Serialize};

/// Boundary constants for the valuation matrix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ValuationThresholds {
    pub peg_cheap: f64,
    pub pe_cheap: f64,
    pub pb_cheap: f64,
    pub peg_fair_max: f64,
    pub pe_fair_max: f64,
    pub pe_expensive: f64,
    pub peg_expensive: f64,
}

impl ValuationThresholds {
    /// The tighter profile: fair P/E up to 30, expensive beyond 35.
    pub fn strict() -> Self {
        Self {
            peg_cheap: 1.0,
            pe_cheap: 15.0,
            pb_cheap: 1.5,
            peg_fair_max: 2.0,
            pe_fair_max: 30.0,
            pe_expensive: 35.0,
            peg_expensive: 2.5,
        }
    }

    /// The growth-tolerant profile: fair P/E up to 35, expensive beyond 40.
    pub fn lenient() -> Self {
        Self {
            peg_cheap: 1.0,
            pe_cheap: 15.0,
            pb_cheap: 1.5,
            peg_fair_max: 2.2,
            pe_fair_max: 35.0,
            pe_expensive: 40.0,
            peg_expensive: 2.5,
        }
    }
}

impl Default for ValuationThresholds {
    fn default() -> Self {
        Self::strict()
    }
}

pub struct ValuationClassifier {
    thresholds: ValuationThresholds,
}

impl ValuationClassifier {
    pub fn new(thresholds: ValuationThresholds) -> Self {
        Self { thresholds }
    }

    /// Classify a snapshot. Rules run top to bottom, first match wins;
    /// a missing ratio never satisfies a condition, so a snapshot with no
    /// usable multiples lands on `Unknown`.
    pub fn classify(&self, snapshot: &FundamentalsSnapshot) -> ValuationSignal {
        let t = &self.thresholds;
        let pe = snapshot.trailing_pe;
        let peg = snapshot.peg_ratio;
        let pb = snapshot.price_to_book;

        let cheap_peg = peg.is_some_and(|v| v < t.peg_cheap);
        let cheap_earnings = pe.is_some_and(|v| v > 0.0 && v < t.pe_cheap)
            && pb.is_some_and(|v| v < t.pb_cheap);
        if cheap_peg || cheap_earnings {
            return ValuationSignal::Undervalued;
        }

        let fair_peg = peg.is_some_and(|v| (t.peg_cheap..=t.peg_fair_max).contains(&v));
        let fair_pe = pe.is_some_and(|v| (t.pe_cheap..=t.pe_fair_max).contains(&v));
        if fair_peg || fair_pe {
            return ValuationSignal::Fair;
        }

        if pe.is_some_and(|v| v > t.pe_expensive) || peg.is_some_and(|v| v > t.peg_expensive) {
            return ValuationSignal::Overvalued;
        }

        ValuationSignal::Unknown
    }
}

impl Default for ValuationClassifier {
    fn default() -> Self {
        Self::new(ValuationThresholds::default())
    }
}
