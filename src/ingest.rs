//! Data-feed contract shared with the external polling collaborator.
//!
//! The poller fetches a JSON object keyed by field name, each value an
//! array of `{x, y}` samples with `x` in float seconds since the epoch.
//! The chart engine projects the configured field list out of that frame,
//! converting seconds to the milliseconds its time scales run on. Shape
//! problems surface as typed errors so a bad fetch never corrupts an
//! already-rendered chart.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::chart::ChartConfig;
use crate::core::{Sample, SeriesSet};
use crate::error::{ChartError, ChartResult};

const MILLISECONDS_PER_SECOND: f64 = 1000.0;

/// One sample as it arrives on the wire, `x` in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub x: f64,
    pub y: f64,
}

/// A full fetch response: field name to raw sample array, field order
/// preserved.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedFrame {
    channels: IndexMap<String, Vec<RawSample>>,
}

impl FeedFrame {
    /// Decodes a fetch response body.
    pub fn parse(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ChartError::MalformedData(format!("feed frame: {err}")))
    }

    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.channels.contains_key(field)
    }

    #[must_use]
    pub fn field_count(&self) -> usize {
        self.channels.len()
    }

    /// Projects `fields` in order into chart series, converting seconds to
    /// milliseconds.
    ///
    /// A configured field absent from the frame or a non-finite sample
    /// rejects the whole projection; the caller keeps its previous data.
    pub fn project(&self, fields: &[String]) -> ChartResult<SeriesSet> {
        let mut series = Vec::with_capacity(fields.len());
        for field in fields {
            let raw = self
                .channels
                .get(field)
                .ok_or_else(|| ChartError::MissingField {
                    field: field.clone(),
                })?;

            let mut samples = Vec::with_capacity(raw.len());
            for sample in raw {
                if !sample.x.is_finite() || !sample.y.is_finite() {
                    return Err(ChartError::MalformedData(format!(
                        "field `{field}` holds a non-finite sample"
                    )));
                }
                samples.push(Sample::new(sample.x * MILLISECONDS_PER_SECOND, sample.y));
            }
            series.push(samples);
        }
        Ok(SeriesSet::new(series))
    }
}

/// Per-chart configuration as the dashboard supplies it.
///
/// `endpoint` is opaque to the engine (the poller owns fetching),
/// `fields` defines series order, `labels` carries
/// `[y_title, x_title, series...]`, and `colors` aligns with `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelConfig {
    pub endpoint: String,
    pub fields: Vec<String>,
    pub labels: Vec<String>,
    pub colors: Vec<String>,
}

impl ChannelConfig {
    pub fn validate(&self) -> ChartResult<()> {
        if self.colors.len() != self.fields.len() {
            return Err(ChartError::InvalidConfig(format!(
                "expected one color per field ({}), got {}",
                self.fields.len(),
                self.colors.len()
            )));
        }
        if self.labels.len() != self.fields.len() + 2 {
            return Err(ChartError::InvalidConfig(format!(
                "expected {} labels for {} fields, got {}",
                self.fields.len() + 2,
                self.fields.len(),
                self.labels.len()
            )));
        }
        Ok(())
    }

    /// Resolves this channel into the engine-facing chart configuration.
    pub fn chart_config(&self, container_id: impl Into<String>) -> ChartResult<ChartConfig> {
        self.validate()?;
        ChartConfig::from_hex_colors(container_id, self.labels.clone(), &self.colors)
    }
}
