use serde::{Deserialize, Serialize};

/// Strategic signal from the quality x trend decision matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategySignal {
    SweetSpot,
    ValueChance,
    JunkRally,
    BearMarket,
    Neutral,
}

impl StrategySignal {
    pub fn title(&self) -> &'static str {
        match self {
            StrategySignal::SweetSpot => "Sweet Spot",
            StrategySignal::ValueChance => "Value Chance",
            StrategySignal::JunkRally => "Junk Rally",
            StrategySignal::BearMarket => "Bear Market",
            StrategySignal::Neutral => "Neutral",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StrategySignal::SweetSpot => "Top quality riding an intact trend",
            StrategySignal::ValueChance => "Quality being punished by the market",
            StrategySignal::JunkRally => "Hype without substance",
            StrategySignal::BearMarket => "Negative sentiment across the board",
            StrategySignal::Neutral => "Watch and wait",
        }
    }

    /// Badge color for table rendering.
    pub fn color(&self) -> &'static str {
        match self {
            StrategySignal::SweetSpot => "#1f77b4",
            StrategySignal::ValueChance => "#2ca02c",
            StrategySignal::JunkRally => "#d62728",
            StrategySignal::BearMarket => "#7f7f7f",
            StrategySignal::Neutral => "#bbbbbb",
        }
    }
}

/// Coarse trend direction used by the discrete matrix variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Bullish,
    Bearish,
    Neutral,
}

/// A trend reading: either a 0-10 psychology score or a coarse direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendReading {
    Score(u8),
    Direction(TrendDirection),
}

impl TrendReading {
    /// Representative score for a direction-only reading.
    fn as_score(self) -> u8 {
        match self {
            TrendReading::Score(s) => s,
            TrendReading::Direction(TrendDirection::Bullish) => 8,
            TrendReading::Direction(TrendDirection::Bearish) => 2,
            TrendReading::Direction(TrendDirection::Neutral) => 5,
        }
    }

    /// Coarse direction for a score-only reading.
    fn as_direction(self) -> TrendDirection {
        match self {
            TrendReading::Direction(d) => d,
            TrendReading::Score(s) if s >= 7 => TrendDirection::Bullish,
            TrendReading::Score(s) if s <= 4 => TrendDirection::Bearish,
            TrendReading::Score(_) => TrendDirection::Neutral,
        }
    }
}

/// The two decision-matrix policies found across the dashboard variants.
///
/// The thresholds genuinely differ (SweetSpot requires quality >= 7 in the
/// continuous matrix but >= 8 in the discrete one), so both are kept as
/// selectable variants rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatrixVariant {
    Continuous,
    DiscreteTrend,
}

impl MatrixVariant {
    /// Combine a quality score and a trend reading into a strategic signal.
    /// Rules are evaluated top to bottom, first match wins.
    pub fn classify(&self, quality: u8, trend: TrendReading) -> StrategySignal {
        match self {
            MatrixVariant::Continuous => {
                let psych = trend.as_score();
                if quality >= 7 && psych >= 7 {
                    StrategySignal::SweetSpot
                } else if quality >= 7 && psych <= 4 {
                    StrategySignal::ValueChance
                } else if quality <= 4 && psych >= 7 {
                    StrategySignal::JunkRally
                } else if psych <= 3 {
                    StrategySignal::BearMarket
                } else {
                    StrategySignal::Neutral
                }
            }
            MatrixVariant::DiscreteTrend => match trend.as_direction() {
                TrendDirection::Bullish if quality >= 8 => StrategySignal::SweetSpot,
                TrendDirection::Bearish if quality >= 7 => StrategySignal::ValueChance,
                TrendDirection::Bullish if quality <= 4 => StrategySignal::JunkRally,
                _ => StrategySignal::Neutral,
            },
        }
    }
}

/// ETF momentum/risk signal from the trend-distance pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EtfSignal {
    Compounder,
    Momentum,
    Cooling,
    DipCrash,
    Neutral,
}

impl EtfSignal {
    pub fn title(&self) -> &'static str {
        match self {
            EtfSignal::Compounder => "Compounder",
            EtfSignal::Momentum => "Momentum",
            EtfSignal::Cooling => "Cooling",
            EtfSignal::DipCrash => "Dip / Crash",
            EtfSignal::Neutral => "Neutral",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EtfSignal::Compounder => "Steady uptrend with low volatility",
            EtfSignal::Momentum => "Strong uptrend, elevated volatility",
            EtfSignal::Cooling => "Below trend, drawdown still contained",
            EtfSignal::DipCrash => "Deep below trend and far off the high",
            EtfSignal::Neutral => "No clear trend edge",
        }
    }
}

/// Valuation verdict from the P/E / PEG / P/B matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValuationSignal {
    Undervalued,
    Fair,
    Overvalued,
    Unknown,
}

impl ValuationSignal {
    pub fn label(&self) -> &'static str {
        match self {
            ValuationSignal::Undervalued => "Undervalued",
            ValuationSignal::Fair => "Fairly valued",
            ValuationSignal::Overvalued => "Overvalued",
            ValuationSignal::Unknown => "Insufficient data",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ValuationSignal::Undervalued => "#2ca02c",
            ValuationSignal::Fair => "#ff7f0e",
            ValuationSignal::Overvalued => "#d62728",
            ValuationSignal::Unknown => "#888888",
        }
    }

    pub fn rationale(&self) -> &'static str {
        match self {
            ValuationSignal::Undervalued => "Cheap relative to growth or book value",
            ValuationSignal::Fair => "Multiples inside the normal band",
            ValuationSignal::Overvalued => "Multiples stretched beyond the band",
            ValuationSignal::Unknown => "Not enough ratio data to judge",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuous_matrix_quadrants() {
        let m = MatrixVariant::Continuous;
        assert_eq!(m.classify(9, TrendReading::Score(8)), StrategySignal::SweetSpot);
        assert_eq!(m.classify(9, TrendReading::Score(3)), StrategySignal::ValueChance);
        assert_eq!(m.classify(3, TrendReading::Score(8)), StrategySignal::JunkRally);
        assert_eq!(m.classify(5, TrendReading::Score(2)), StrategySignal::BearMarket);
        assert_eq!(m.classify(5, TrendReading::Score(5)), StrategySignal::Neutral);
    }

    #[test]
    fn continuous_matrix_boundary_rows() {
        let m = MatrixVariant::Continuous;
        // quality 7 / psych 7 is the inclusive corner of the sweet spot
        assert_eq!(m.classify(7, TrendReading::Score(7)), StrategySignal::SweetSpot);
        // psych 5-6 with high quality falls through to neutral
        assert_eq!(m.classify(9, TrendReading::Score(5)), StrategySignal::Neutral);
    }

    #[test]
    fn discrete_matrix_uses_stricter_sweet_spot() {
        let m = MatrixVariant::DiscreteTrend;
        let bull = TrendReading::Direction(TrendDirection::Bullish);
        let bear = TrendReading::Direction(TrendDirection::Bearish);

        assert_eq!(m.classify(8, bull), StrategySignal::SweetSpot);
        // quality 7 + bullish is a sweet spot in the continuous matrix but
        // only neutral here
        assert_eq!(m.classify(7, bull), StrategySignal::Neutral);
        assert_eq!(m.classify(7, bear), StrategySignal::ValueChance);
        assert_eq!(m.classify(3, bull), StrategySignal::JunkRally);
        assert_eq!(
            m.classify(5, TrendReading::Direction(TrendDirection::Neutral)),
            StrategySignal::Neutral
        );
    }

    #[test]
    fn score_reading_maps_to_direction() {
        let m = MatrixVariant::DiscreteTrend;
        assert_eq!(m.classify(9, TrendReading::Score(8)), StrategySignal::SweetSpot);
        assert_eq!(m.classify(9, TrendReading::Score(2)), StrategySignal::ValueChance);
        assert_eq!(m.classify(9, TrendReading::Score(5)), StrategySignal::Neutral);
    }
}
