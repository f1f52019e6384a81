//! Time series storage and lookup.
//!
//! A [`Series`] is an ascending run of [`Sample`]s. Lookups go through binary
//! search on the timestamp column: [`Series::nearest_index`] for pointer
//! queries and [`Series::prefix_through`] for truncating the chart at an
//! annotation.

use serde::Serialize;
use thiserror::Error;

/// Errors raised by series lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    /// A prefix was requested at a timestamp that is not a sample
    #[error("No sample at timestamp {timestamp} (prefix requires an exact match)")]
    NoExactSample { timestamp: i64 },
}

/// One observation: epoch milliseconds and a value
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sample {
    pub timestamp: i64,
    pub value: f64,
}

impl Sample {
    #[inline]
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Samples sorted ascending by timestamp.
///
/// Ordering is checked by the market data loader; constructing a series
/// directly from unsorted samples gives unspecified lookup results.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// Timestamp column, in order
    pub fn timestamps(&self) -> impl Iterator<Item = i64> + '_ {
        self.samples.iter().map(|s| s.timestamp)
    }

    /// First and last timestamp
    pub fn time_range(&self) -> Option<(i64, i64)> {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => Some((first.timestamp, last.timestamp)),
            _ => None,
        }
    }

    /// Find the sample closest to `timestamp`.
    ///
    /// Uses the insertion point of `timestamp` and compares the two
    /// neighbours around it. When both are equally far away the later
    /// sample wins. Queries outside the series clamp to the first or last
    /// sample.
    pub fn nearest_index(&self, timestamp: i64) -> Option<usize> {
        if self.samples.is_empty() {
            return None;
        }

        let insert_at = self.samples.partition_point(|s| s.timestamp < timestamp);
        if insert_at == 0 {
            return Some(0);
        }
        if insert_at == self.samples.len() {
            return Some(self.samples.len() - 1);
        }

        let left = self.samples[insert_at - 1].timestamp;
        let right = self.samples[insert_at].timestamp;
        // i128 keeps the gap arithmetic exact for any pair of i64 timestamps
        let left_gap = timestamp as i128 - left as i128;
        let right_gap = right as i128 - timestamp as i128;

        if left_gap >= right_gap {
            Some(insert_at)
        } else {
            Some(insert_at - 1)
        }
    }

    /// Index of the sample whose timestamp equals `timestamp` exactly
    pub fn position_of(&self, timestamp: i64) -> Option<usize> {
        self.samples
            .binary_search_by_key(&timestamp, |s| s.timestamp)
            .ok()
    }

    /// All samples from the start up to and including the one at `timestamp`.
    pub fn prefix_through(&self, timestamp: i64) -> Result<&[Sample], SeriesError> {
        let end = self
            .position_of(timestamp)
            .ok_or(SeriesError::NoExactSample { timestamp })?;
        Ok(&self.samples[..=end])
    }
}
