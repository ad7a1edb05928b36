//! Batch KPIs: the headline numbers the dashboard shows above the table.

use serde::{Deserialize, Serialize};

use radar_core::StrategySignal;

use crate::InstrumentOutcome;

/// The instrument whose simulated position gained the most.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestInvestment {
    pub symbol: String,
    pub name: String,
    pub profit: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub analyzed: usize,
    pub scored: usize,
    pub failed: usize,
    pub sweet_spots: usize,
    pub best_profit: Option<BestInvestment>,
    pub mean_value: f64,
    pub mean_profit: f64,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[InstrumentOutcome]) -> Self {
        let mut scored = 0usize;
        let mut failed = 0usize;
        let mut sweet_spots = 0usize;
        let mut value_sum = 0.0;
        let mut profit_sum = 0.0;
        let mut best: Option<BestInvestment> = None;

        for outcome in outcomes {
            let Some(report) = outcome.report() else {
                failed += 1;
                continue;
            };
            scored += 1;
            if report.signal == StrategySignal::SweetSpot {
                sweet_spots += 1;
            }
            value_sum += report.simulation.current_value;
            profit_sum += report.simulation.profit;

            let is_best = best
                .as_ref()
                .map_or(true, |b| report.simulation.profit > b.profit);
            if is_best {
                best = Some(BestInvestment {
                    symbol: report.symbol.clone(),
                    name: report.name.clone(),
                    profit: report.simulation.profit,
                });
            }
        }

        let (mean_value, mean_profit) = if scored > 0 {
            (value_sum / scored as f64, profit_sum / scored as f64)
        } else {
            (0.0, 0.0)
        };

        Self {
            analyzed: outcomes.len(),
            scored,
            failed,
            sweet_spots,
            best_profit: best,
            mean_value,
            mean_profit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InstrumentOutcome, InstrumentReport};
    use radar_core::{AssetClass, ScoreResult, SimulationOutcome};

    fn report(symbol: &str, profit: f64, signal: StrategySignal) -> InstrumentReport {
        InstrumentReport {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            sector: "Test".to_string(),
            asset_class: AssetClass::Stock,
            quality: ScoreResult::clamped(8, vec![]),
            trend: ScoreResult::clamped(8, vec![]),
            signal,
            valuation: None,
            etf_metrics: None,
            simulation: SimulationOutcome {
                current_value: 1000.0 + profit,
                profit,
            },
        }
    }

    #[test]
    fn aggregates_scored_and_failed() {
        let outcomes = vec![
            InstrumentOutcome::Scored(report("AAA", 250.0, StrategySignal::SweetSpot)),
            InstrumentOutcome::Partial {
                report: report("BBB", -50.0, StrategySignal::Neutral),
                missing: "no fundamentals".to_string(),
            },
            InstrumentOutcome::Failed {
                symbol: "CCC".to_string(),
                reason: "no data".to_string(),
            },
        ];

        let summary = BatchSummary::from_outcomes(&outcomes);
        assert_eq!(summary.analyzed, 3);
        assert_eq!(summary.scored, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.sweet_spots, 1);
        assert_eq!(summary.best_profit.as_ref().unwrap().symbol, "AAA");
        assert!((summary.mean_profit - 100.0).abs() < 1e-9);
        assert!((summary.mean_value - 1100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_batch_has_empty_summary() {
        let summary = BatchSummary::from_outcomes(&[]);
        assert_eq!(summary.analyzed, 0);
        assert!(summary.best_profit.is_none());
        assert_eq!(summary.mean_value, 0.0);
    }
}
