use async_trait::async_trait;

use crate::{FundamentalsSnapshot, PriceSeries, RadarError};

/// Source of historical closing prices, one series per ticker.
///
/// Fetching, caching and retry policy all live behind this trait; the
/// scoring core only ever sees materialized series.
#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    async fn price_history(&self, symbol: &str) -> Result<PriceSeries, RadarError>;
}

/// Source of fundamental-ratio snapshots.
///
/// `Ok(None)` means the provider has no fundamentals for the ticker
/// (typical for ETFs) and is distinct from a provider failure.
#[async_trait]
pub trait FundamentalsProvider: Send + Sync {
    async fn fundamentals(&self, symbol: &str)
        -> Result<Option<FundamentalsSnapshot>, RadarError>;
}
