use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::series::{Sample, Series};

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur while loading market data
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be read
    #[error("Failed to read market data {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid market chart JSON
    #[error("Failed to parse market data: {0}")]
    Json(#[from] serde_json::Error),

    /// A value could not be read as a decimal number
    #[error("Invalid value {value:?} in {series} at index {index}")]
    InvalidValue {
        series: SeriesKind,
        index: usize,
        value: String,
    },

    /// A series has no samples
    #[error("Series {0} is empty")]
    Empty(SeriesKind),

    /// A series does not have as many samples as the price series
    #[error("Series {series} has {found} samples, expected {expected}")]
    LengthMismatch {
        series: SeriesKind,
        expected: usize,
        found: usize,
    },

    /// A series is not aligned with the price series
    #[error("Series {series} has timestamp {found} at index {index}, prices have {expected}")]
    TimestampMismatch {
        series: SeriesKind,
        index: usize,
        expected: i64,
        found: i64,
    },

    /// Timestamps do not strictly increase
    #[error("Series {series} is not ascending at index {index}")]
    NotAscending { series: SeriesKind, index: usize },
}

/// The three series carried by a market chart document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Prices,
    MarketCaps,
    TotalVolumes,
}

impl SeriesKind {
    /// JSON key of this series
    pub fn key(&self) -> &'static str {
        match self {
            SeriesKind::Prices => "prices",
            SeriesKind::MarketCaps => "market_caps",
            SeriesKind::TotalVolumes => "total_volumes",
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// Raw Document
// ============================================================================

/// Values arrive as decimal strings; plain JSON numbers are accepted too
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Number(f64),
}

#[derive(Debug, Deserialize)]
struct RawMarketChart {
    prices: Vec<(i64, RawValue)>,
    market_caps: Vec<(i64, RawValue)>,
    total_volumes: Vec<(i64, RawValue)>,
}

fn convert_series(kind: SeriesKind, raw: Vec<(i64, RawValue)>) -> Result<Series, DataError> {
    let mut samples = Vec::with_capacity(raw.len());
    for (index, (timestamp, value)) in raw.into_iter().enumerate() {
        let value = match value {
            RawValue::Number(v) => v,
            RawValue::Text(text) => {
                text.trim()
                    .parse::<f64>()
                    .map_err(|_| DataError::InvalidValue {
                        series: kind,
                        index,
                        value: text.clone(),
                    })?
            }
        };
        if !value.is_finite() {
            return Err(DataError::InvalidValue {
                series: kind,
                index,
                value: value.to_string(),
            });
        }
        samples.push(Sample::new(timestamp, value));
    }
    Ok(Series::new(samples))
}

// ============================================================================
// Market Data
// ============================================================================

/// All three series at one index
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarketPoint {
    pub index: usize,
    pub timestamp: i64,
    pub price: f64,
    pub market_cap: f64,
    pub volume: f64,
}

/// Validated, index-aligned price / market cap / volume series
#[derive(Clone, Debug, Default)]
pub struct MarketData {
    prices: Series,
    market_caps: Series,
    total_volumes: Series,
}

impl MarketData {
    /// Build from three series, checking order and alignment.
    pub fn from_series(
        prices: Series,
        market_caps: Series,
        total_volumes: Series,
    ) -> Result<Self, DataError> {
        if prices.is_empty() {
            return Err(DataError::Empty(SeriesKind::Prices));
        }

        for (index, pair) in prices.samples().windows(2).enumerate() {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(DataError::NotAscending {
                    series: SeriesKind::Prices,
                    index: index + 1,
                });
            }
        }

        for (kind, other) in [
            (SeriesKind::MarketCaps, &market_caps),
            (SeriesKind::TotalVolumes, &total_volumes),
        ] {
            if other.len() != prices.len() {
                return Err(DataError::LengthMismatch {
                    series: kind,
                    expected: prices.len(),
                    found: other.len(),
                });
            }
            for (index, (expected, found)) in prices.timestamps().zip(other.timestamps()).enumerate()
            {
                if expected != found {
                    return Err(DataError::TimestampMismatch {
                        series: kind,
                        index,
                        expected,
                        found,
                    });
                }
            }
        }

        Ok(Self {
            prices,
            market_caps,
            total_volumes,
        })
    }

    /// Parse a `market_chart.json` document
    pub fn from_json_str(content: &str) -> Result<Self, DataError> {
        let raw: RawMarketChart = serde_json::from_str(content)?;
        let prices = convert_series(SeriesKind::Prices, raw.prices)?;
        let market_caps = convert_series(SeriesKind::MarketCaps, raw.market_caps)?;
        let total_volumes = convert_series(SeriesKind::TotalVolumes, raw.total_volumes)?;
        Self::from_series(prices, market_caps, total_volumes)
    }

    /// Read and parse a `market_chart.json` file
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let content = std::fs::read_to_string(path).map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_json_str(&content)?;

        tracing::info!(
            "Loaded {} samples from {:?} ({:?})",
            data.len(),
            path,
            data.prices.time_range()
        );

        Ok(data)
    }

    pub fn prices(&self) -> &Series {
        &self.prices
    }

    pub fn market_caps(&self) -> &Series {
        &self.market_caps
    }

    pub fn total_volumes(&self) -> &Series {
        &self.total_volumes
    }

    pub fn series(&self, kind: SeriesKind) -> &Series {
        match kind {
            SeriesKind::Prices => &self.prices,
            SeriesKind::MarketCaps => &self.market_caps,
            SeriesKind::TotalVolumes => &self.total_volumes,
        }
    }

    /// Number of samples (identical across the three series)
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Price, market cap and volume at `index`
    pub fn point_at(&self, index: usize) -> Option<MarketPoint> {
        let price = self.prices.get(index)?;
        Some(MarketPoint {
            index,
            timestamp: price.timestamp,
            price: price.value,
            market_cap: self.market_caps.get(index)?.value,
            volume: self.total_volumes.get(index)?.value,
        })
    }

    /// Nearest point to `timestamp` across all three series
    pub fn nearest_point(&self, timestamp: i64) -> Option<MarketPoint> {
        self.prices
            .nearest_index(timestamp)
            .and_then(|index| self.point_at(index))
    }
}
