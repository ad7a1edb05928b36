use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::RadarError;

/// A single daily closing observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Daily closing prices for one instrument, strictly ascending by date.
///
/// Non-trading days are simply absent, never zero-filled. All closes are
/// positive in the instrument's native currency; both invariants are
/// enforced at construction so downstream math never divides by zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Result<Self, RadarError> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(RadarError::InvalidInput(format!(
                    "price series dates not strictly ascending at {}",
                    pair[1].date
                )));
            }
        }
        if let Some(p) = points.iter().find(|p| p.close <= 0.0) {
            return Err(RadarError::InvalidInput(format!(
                "non-positive close {} at {}",
                p.close, p.date
            )));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|p| p.close)
    }

    /// Observations dated on or after `start`.
    pub fn from_date(&self, start: NaiveDate) -> &[PricePoint] {
        let idx = self.points.partition_point(|p| p.date < start);
        &self.points[idx..]
    }
}

/// Asset class of an instrument, selecting the scoring path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Stock,
    Etf,
}

/// Point-in-time fundamental ratios for one instrument.
///
/// Every field is optional: absence means "no information", which is
/// distinct from zero. Each scorer documents the default it substitutes
/// for a missing field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FundamentalsSnapshot {
    pub gross_margins: Option<f64>,
    pub operating_margins: Option<f64>,
    pub return_on_equity: Option<f64>,
    /// Debt-to-equity, "times 100" convention (80 means 0.8x).
    pub debt_to_equity: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub forward_pe: Option<f64>,
    pub peg_ratio: Option<f64>,
    pub price_to_book: Option<f64>,
    pub beta: Option<f64>,
    pub currency: Option<String>,
    pub current_price: Option<f64>,
}

/// A bounded 0-10 score plus the reasons behind each point contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub reasons: Vec<String>,
}

impl ScoreResult {
    /// Clamp a raw additive sum (which may be negative or exceed 10)
    /// into the emitted [0,10] range.
    pub fn clamped(raw: i32, reasons: Vec<String>) -> Self {
        Self {
            score: raw.clamp(0, 10) as u8,
            reasons,
        }
    }

    /// The neutral default used when there is not enough history to score.
    pub fn neutral(reason: impl Into<String>) -> Self {
        Self {
            score: 5,
            reasons: vec![reason.into()],
        }
    }
}

/// Outcome of a hypothetical lump-sum buy-and-hold investment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub current_value: f64,
    pub profit: f64,
}

impl SimulationOutcome {
    /// Sentinel for a window with no observations: not an error.
    pub fn no_data() -> Self {
        Self {
            current_value: 0.0,
            profit: 0.0,
        }
    }
}
