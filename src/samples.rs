//! In-memory latency sample series.
//!
//! Samples are kept in a `BTreeMap` ordered by their index. Indices are
//! assigned from the series size at insertion time and removal always takes
//! the highest index, so the key set stays contiguous from zero.

use std::collections::BTreeMap;

use crate::error::{LatviewError, Result};

/// Position of a sample in the series.
pub type SampleIndex = u64;

/// Summary statistics for one latency sample, in milliseconds.
///
/// Records are created zeroed and never change afterwards; only
/// [`StatisticRecord::p95`] is plotted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatisticRecord {
    /// Minimum latency.
    pub min: f64,
    /// Maximum latency.
    pub max: f64,
    /// Mean latency.
    pub average: f64,
    /// Median latency.
    pub median: f64,
    /// 90th percentile latency.
    pub p90: f64,
    /// 95th percentile latency.
    pub p95: f64,
    /// 99th percentile latency.
    pub p99: f64,
}

/// Ordered collection of latency samples.
#[derive(Debug, Clone, Default)]
pub struct SampleSeries {
    entries: BTreeMap<SampleIndex, StatisticRecord>,
}

impl SampleSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Number of samples in the series.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a zeroed sample record.
    ///
    /// The new sample is keyed by the series size before insertion, which is
    /// strictly greater than every existing key. Returns the assigned index.
    pub fn add(&mut self) -> SampleIndex {
        let index = self.entries.len() as SampleIndex;
        self.entries.insert(index, StatisticRecord::default());
        index
    }

    /// Remove the sample with the highest index.
    ///
    /// Returns the removed index, or [`LatviewError::NoSamples`] when the
    /// series is empty.
    pub fn remove_latest(&mut self) -> Result<SampleIndex> {
        let (&index, _) = self.entries.last_key_value().ok_or(LatviewError::NoSamples)?;
        self.entries.remove(&index);
        Ok(index)
    }

    /// Iterate over samples in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (SampleIndex, &StatisticRecord)> {
        self.entries.iter().map(|(&k, v)| (k, v))
    }

    /// The sample with the highest index, if any.
    pub fn latest(&self) -> Option<(SampleIndex, &StatisticRecord)> {
        self.entries.last_key_value().map(|(&k, v)| (k, v))
    }
}

#[cfg(test)]
impl SampleSeries {
    /// Build a series with the given p95 values, keyed from zero.
    pub(crate) fn with_p95(values: &[f64]) -> Self {
        let entries = values
            .iter()
            .enumerate()
            .map(|(i, &p95)| {
                (
                    i as SampleIndex,
                    StatisticRecord {
                        p95,
                        ..StatisticRecord::default()
                    },
                )
            })
            .collect();
        Self { entries }
    }
}
