//! Batch analysis across an instrument catalog.
//!
//! Fans the scoring pipeline out over every instrument of a catalog,
//! collecting an explicit outcome per instrument so the caller can tell
//! "no data" from "provider error" from "scored low".

mod summary;

pub use summary::{BatchSummary, BestInvestment};

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;

use invest_sim::InvestmentSimulator;
use quality_analysis::{QualityScoreEngine, ValuationClassifier, ValuationThresholds};
use radar_core::{
    AssetClass, Catalog, CatalogEntry, FundamentalsProvider, FundamentalsSnapshot, MatrixVariant,
    PriceHistoryProvider, RadarError, ScoreResult, SimulationOutcome, StrategySignal,
    TrendReading, ValuationSignal,
};
use trend_analysis::{EtfMetrics, EtfMetricsEngine, TrendScoreEngine};

/// The curated stock universe shipped with the radar.
pub fn default_stock_catalog() -> Result<Catalog, RadarError> {
    Catalog::from_json(include_str!("../data/stocks.json"))
}

/// The curated ETF universe shipped with the radar.
pub fn default_etf_catalog() -> Result<Catalog, RadarError> {
    Catalog::from_json(include_str!("../data/etfs.json"))
}

/// Caller-selected analysis policies and simulator parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarConfig {
    pub matrix_variant: MatrixVariant,
    pub valuation_thresholds: ValuationThresholds,
    pub sim_start: NaiveDate,
    pub sim_principal: f64,
}

/// Everything the presentation layer renders for one instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentReport {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub asset_class: AssetClass,
    pub quality: ScoreResult,
    pub trend: ScoreResult,
    pub signal: StrategySignal,
    pub valuation: Option<ValuationSignal>,
    pub etf_metrics: Option<EtfMetrics>,
    pub simulation: SimulationOutcome,
}

/// Per-instrument result of a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InstrumentOutcome {
    /// Fully scored.
    Scored(InstrumentReport),
    /// Scored, but without fundamentals; the reason is preserved.
    Partial { report: InstrumentReport, missing: String },
    /// Could not be scored at all.
    Failed { symbol: String, reason: String },
}

impl InstrumentOutcome {
    pub fn symbol(&self) -> &str {
        match self {
            InstrumentOutcome::Scored(r) | InstrumentOutcome::Partial { report: r, .. } => {
                &r.symbol
            }
            InstrumentOutcome::Failed { symbol, .. } => symbol,
        }
    }

    pub fn report(&self) -> Option<&InstrumentReport> {
        match self {
            InstrumentOutcome::Scored(r) | InstrumentOutcome::Partial { report: r, .. } => Some(r),
            InstrumentOutcome::Failed { .. } => None,
        }
    }
}

/// A full batch run plus summary KPIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    pub outcomes: Vec<InstrumentOutcome>,
    pub summary: BatchSummary,
    pub timestamp: DateTime<Utc>,
}

/// Orchestrates providers, scorers and the simulator over a catalog.
#[derive(Clone)]
pub struct MarketRadar {
    prices: Arc<dyn PriceHistoryProvider>,
    fundamentals: Arc<dyn FundamentalsProvider>,
    config: RadarConfig,
}

impl MarketRadar {
    pub fn new(
        prices: Arc<dyn PriceHistoryProvider>,
        fundamentals: Arc<dyn FundamentalsProvider>,
        config: RadarConfig,
    ) -> Self {
        Self {
            prices,
            fundamentals,
            config,
        }
    }

    /// Analyze every instrument of the catalog concurrently. Instruments
    /// are independent, so failures never abort the batch.
    pub async fn analyze_catalog(&self, catalog: &Catalog) -> BatchResult {
        tracing::info!(
            "analyzing {} instruments across {} sectors",
            catalog.len(),
            catalog.sectors.len()
        );

        let mut tasks = JoinSet::new();
        for (sector, entry) in catalog.entries() {
            let radar = self.clone();
            let sector = sector.name.clone();
            let entry = entry.clone();
            let asset_class = catalog.asset_class;
            tasks.spawn(async move {
                radar.analyze_instrument(&entry, &sector, asset_class).await
            });
        }

        let mut outcomes = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => {
                    if let InstrumentOutcome::Failed { symbol, reason } = &outcome {
                        tracing::warn!("skipping {symbol}: {reason}");
                    }
                    outcomes.push(outcome);
                }
                Err(e) => tracing::error!("analysis task error: {e}"),
            }
        }

        // Stable display order regardless of task completion order
        outcomes.sort_by(|a, b| a.symbol().cmp(b.symbol()));

        let summary = BatchSummary::from_outcomes(&outcomes);
        BatchResult {
            outcomes,
            summary,
            timestamp: Utc::now(),
        }
    }

    /// Score one instrument end to end.
    pub async fn analyze_instrument(
        &self,
        entry: &CatalogEntry,
        sector: &str,
        asset_class: AssetClass,
    ) -> InstrumentOutcome {
        let series = match self.prices.price_history(&entry.symbol).await {
            Ok(series) if !series.is_empty() => series,
            Ok(_) => {
                return InstrumentOutcome::Failed {
                    symbol: entry.symbol.clone(),
                    reason: "provider returned an empty price series".to_string(),
                }
            }
            Err(e) => {
                return InstrumentOutcome::Failed {
                    symbol: entry.symbol.clone(),
                    reason: e.to_string(),
                }
            }
        };

        let simulation = match InvestmentSimulator::new().simulate(
            &series,
            self.config.sim_start,
            self.config.sim_principal,
        ) {
            Ok(outcome) => outcome,
            Err(e) => {
                return InstrumentOutcome::Failed {
                    symbol: entry.symbol.clone(),
                    reason: e.to_string(),
                }
            }
        };

        let trend_engine = TrendScoreEngine::new();

        match asset_class {
            AssetClass::Stock => {
                let (snapshot, missing) = match self.fundamentals.fundamentals(&entry.symbol).await
                {
                    Ok(Some(snapshot)) => (Some(snapshot), None),
                    Ok(None) => (
                        None,
                        Some("provider has no fundamentals for this ticker".to_string()),
                    ),
                    Err(e) => (None, Some(e.to_string())),
                };

                // An empty snapshot earns no quality credit, which is the
                // documented behavior for unknown data.
                let fallback = FundamentalsSnapshot::default();
                let quality =
                    QualityScoreEngine::new().score(snapshot.as_ref().unwrap_or(&fallback));
                let trend = trend_engine.score(&series, snapshot.as_ref(), AssetClass::Stock);
                let signal = self
                    .config
                    .matrix_variant
                    .classify(quality.score, TrendReading::Score(trend.score));
                let valuation = snapshot
                    .as_ref()
                    .map(|s| ValuationClassifier::new(self.config.valuation_thresholds).classify(s));

                let report = InstrumentReport {
                    symbol: entry.symbol.clone(),
                    name: entry.name.clone(),
                    sector: sector.to_string(),
                    asset_class,
                    quality,
                    trend,
                    signal,
                    valuation,
                    etf_metrics: None,
                    simulation,
                };

                match missing {
                    None => InstrumentOutcome::Scored(report),
                    Some(missing) => {
                        tracing::warn!("{}: scoring without fundamentals: {missing}", entry.symbol);
                        InstrumentOutcome::Partial { report, missing }
                    }
                }
            }
            AssetClass::Etf => {
                // No fundamentals for ETFs: the stability score stands in
                // for quality in the decision matrix.
                let quality = trend_engine.stability_score(&series);
                let trend = trend_engine.score(&series, None, AssetClass::Etf);
                let signal = self
                    .config
                    .matrix_variant
                    .classify(quality.score, TrendReading::Score(trend.score));
                let etf_metrics = EtfMetricsEngine::new().analyze(&series);

                InstrumentOutcome::Scored(InstrumentReport {
                    symbol: entry.symbol.clone(),
                    name: entry.name.clone(),
                    sector: sector.to_string(),
                    asset_class,
                    quality,
                    trend,
                    signal,
                    valuation: None,
                    etf_metrics,
                    simulation,
                })
            }
        }
    }
}
