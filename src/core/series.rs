use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One time-value sample, `x` in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Ordered collection of series for one chart.
///
/// Series index is load-bearing: position `i` always refers to the same
/// logical field across updates and maps 1:1 onto the chart's color and
/// label lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesSet(Vec<Vec<Sample>>);

impl SeriesSet {
    #[must_use]
    pub fn new(series: Vec<Vec<Sample>>) -> Self {
        Self(series)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn series(&self) -> &[Vec<Sample>] {
        &self.0
    }

    /// True when no series holds a single sample (zero series included).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|series| series.is_empty())
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// Most recent timestamp across all series, `None` when empty.
    #[must_use]
    pub fn latest_timestamp(&self) -> Option<f64> {
        self.samples()
            .map(|sample| OrderedFloat(sample.x))
            .max()
            .map(OrderedFloat::into_inner)
    }

    /// Earliest timestamp across all series, `None` when empty.
    #[must_use]
    pub fn earliest_timestamp(&self) -> Option<f64> {
        self.samples()
            .map(|sample| OrderedFloat(sample.x))
            .min()
            .map(OrderedFloat::into_inner)
    }

    /// Largest `y` across all series, `None` when empty.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.samples()
            .map(|sample| OrderedFloat(sample.y))
            .max()
            .map(OrderedFloat::into_inner)
    }

    /// Rejects non-finite samples before they can reach chart state.
    pub fn validate(&self) -> ChartResult<()> {
        for (index, series) in self.0.iter().enumerate() {
            for sample in series {
                if !sample.is_finite() {
                    return Err(ChartError::MalformedData(format!(
                        "series {index} holds a non-finite sample"
                    )));
                }
            }
        }
        Ok(())
    }

    fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.0.iter().flatten()
    }
}

impl From<Vec<Vec<Sample>>> for SeriesSet {
    fn from(series: Vec<Vec<Sample>>) -> Self {
        Self::new(series)
    }
}
