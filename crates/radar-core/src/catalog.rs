//! Instrument Catalog
//!
//! The curated ticker universe, grouped by sector. Loaded from a JSON
//! resource supplied by the caller instead of living as hardcoded tables
//! inside the scoring code.

use serde::{Deserialize, Serialize};

use crate::{AssetClass, RadarError};

/// One instrument: display name plus provider ticker symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub symbol: String,
}

/// A named sector grouping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sector {
    pub name: String,
    pub instruments: Vec<CatalogEntry>,
}

/// A full ticker universe for one asset class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub asset_class: AssetClass,
    pub sectors: Vec<Sector>,
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self, RadarError> {
        serde_json::from_str(raw)
            .map_err(|e| RadarError::InvalidInput(format!("catalog parse failed: {e}")))
    }

    /// Flat view over (sector, instrument) pairs in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (&Sector, &CatalogEntry)> {
        self.sectors
            .iter()
            .flat_map(|s| s.instruments.iter().map(move |e| (s, e)))
    }

    pub fn symbols(&self) -> Vec<String> {
        self.entries().map(|(_, e)| e.symbol.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.sectors.iter().map(|s| s.instruments.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
