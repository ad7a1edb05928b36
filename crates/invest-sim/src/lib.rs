//! Lump-sum buy-and-hold simulation.
//!
//! What a fixed amount invested on a chosen date would be worth today,
//! plus a rebased series for comparison charting.

use chrono::NaiveDate;
use radar_core::{PricePoint, PriceSeries, RadarError, SimulationOutcome};

pub struct InvestmentSimulator;

impl InvestmentSimulator {
    pub fn new() -> Self {
        Self
    }

    /// Simulate investing `principal` at the first observation on or after
    /// `start`, held until the last observation of the full series.
    ///
    /// A window with no observations (start after the series end, or an
    /// empty series) returns the (0, 0) sentinel. A non-positive principal
    /// is a precondition violation and is rejected outright.
    pub fn simulate(
        &self,
        series: &PriceSeries,
        start: NaiveDate,
        principal: f64,
    ) -> Result<SimulationOutcome, RadarError> {
        if principal <= 0.0 {
            return Err(RadarError::InvalidInput(format!(
                "principal must be positive, got {principal}"
            )));
        }

        let subset = series.from_date(start);
        let (Some(entry), Some(current)) = (subset.first(), series.points().last()) else {
            return Ok(SimulationOutcome::no_data());
        };

        let shares = principal / entry.close;
        let current_value = shares * current.close;
        Ok(SimulationOutcome {
            current_value,
            profit: current_value - principal,
        })
    }

    /// The post-start series normalized so its first value equals the
    /// invested principal, i.e. the position value over time. Empty when
    /// the window holds no observations.
    pub fn rebase(
        &self,
        series: &PriceSeries,
        start: NaiveDate,
        principal: f64,
    ) -> Result<Vec<PricePoint>, RadarError> {
        if principal <= 0.0 {
            return Err(RadarError::InvalidInput(format!(
                "principal must be positive, got {principal}"
            )));
        }

        let subset = series.from_date(start);
        let Some(first) = subset.first() else {
            return Ok(Vec::new());
        };

        Ok(subset
            .iter()
            .map(|p| PricePoint {
                date: p.date,
                close: p.close / first.close * principal,
            })
            .collect())
    }
}

impl Default for InvestmentSimulator {
    fn default() -> Self {
        Self::new()
    }
}
